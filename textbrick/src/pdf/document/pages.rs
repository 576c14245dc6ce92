use super::{
    dict_types, ObjectNumbering, FONT_RESOURCE, K_CONTENTS, K_COUNT, K_FONT, K_KIDS, K_MEDIA_BOX, K_PARENT,
    K_RESOURCES, K_TYPE,
};
use crate::{
    layout::Layout,
    pdf::{Array, Dictionary, Name, Object, Reference},
};

/// The root of the page tree. Kids are listed in page order.
pub fn page_tree(numbering: &ObjectNumbering) -> Dictionary {
    let kids: Array = (0..numbering.page_count())
        .map(|index| Object::from(Reference::new(numbering.page(index))))
        .collect();

    Dictionary::from([
        (Name::from(K_TYPE), Object::from(Name::from(dict_types::PAGES))),
        (Name::from(K_KIDS), Object::from(kids)),
        (Name::from(K_COUNT), Object::from(numbering.page_count())),
    ])
}

/// Page object for the page with zero based `index`.
pub fn page(numbering: &ObjectNumbering, index: usize, layout: &Layout) -> Dictionary {
    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::from(layout.page_width),
        Object::from(layout.page_height),
    ];
    let fonts = Dictionary::from([(
        Name::from(FONT_RESOURCE),
        Object::from(Reference::new(numbering.font())),
    )]);
    let resources = Dictionary::from([(Name::from(K_FONT), Object::from(fonts))]);

    Dictionary::from([
        (Name::from(K_TYPE), Object::from(Name::from(dict_types::PAGE))),
        (Name::from(K_PARENT), Object::from(Reference::new(numbering.pages()))),
        (Name::from(K_MEDIA_BOX), Object::from(media_box)),
        (Name::from(K_RESOURCES), Object::from(resources)),
        (
            Name::from(K_CONTENTS),
            Object::from(Reference::new(numbering.content(index))),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kids_in_page_order() {
        let tree = page_tree(&ObjectNumbering::new(3));
        let kids: Vec<usize> = tree
            .get(K_KIDS)
            .and_then(Object::array)
            .map(|a| a.iter().filter_map(Object::reference).map(Reference::index).collect())
            .unwrap_or_default();
        assert_eq!(kids, vec![4, 6, 8]);
        assert_eq!(tree.get(K_COUNT), Some(&Object::Integer(3)));
    }

    #[test]
    fn page_points_to_its_content() {
        let p = page(&ObjectNumbering::new(3), 1, &Layout::default());
        assert_eq!(p.get(K_CONTENTS), Some(&Object::from(Reference::new(7))));
        assert_eq!(p.get(K_PARENT), Some(&Object::from(Reference::new(2))));
        assert_eq!(
            p.get(K_MEDIA_BOX),
            Some(&Object::from(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842)
            ]))
        );
    }
}
