/// Cross-reference table of a PDF section.
///
/// Entries are kept in ascending object number order starting at object 0,
/// without gaps, so the table can be written as a single subsection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xref(Vec<XrefEntry>);

pub const XREF: &[u8] = b"xref";
/// Marks an entry that is in use.
pub const USED_MARKER: &[u8] = b"n";
/// Marks an entry that is free.
pub const FREE_MARKER: &[u8] = b"f";

/// Generation of the head of the free list (object 0).
pub const FREE_HEAD_GENERATION: u32 = 65535;

impl Xref {
    /// Build the table for `used` objects.
    ///
    /// Object 0 and every unused number below the highest used one become
    /// free entries that form a linked list starting at object 0.
    pub fn with_used(mut used: Vec<UsedObject>) -> Self {
        used.sort_by_key(|u| u.number);
        let size = used.last().map(|u| u.number + 1).unwrap_or(1);

        let mut slots: Vec<Option<UsedObject>> = vec![None; size];
        for u in used {
            let number = u.number;
            slots[number] = Some(u);
        }
        // object 0 is always free
        slots[0] = None;

        let free_numbers: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter_map(|(number, slot)| slot.is_none().then(|| number))
            .collect();

        let mut entries = Vec::with_capacity(size);
        let mut next_free = free_numbers.iter().skip(1);
        for (number, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(u) => entries.push(XrefEntry::Used(u)),
                None => entries.push(XrefEntry::Free(FreeObject {
                    number,
                    generation: if number == 0 { FREE_HEAD_GENERATION } else { 0 },
                    next_free: next_free.next().copied().unwrap_or(0),
                })),
            }
        }

        Xref(entries)
    }

    pub fn entries(&self) -> &[XrefEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn used_objects(&self) -> impl Iterator<Item = &UsedObject> {
        self.0
            .iter()
            .filter_map(|entry| if let XrefEntry::Used(u) = entry { Some(u) } else { None })
    }

    pub fn free_objects(&self) -> impl Iterator<Item = &FreeObject> {
        self.0
            .iter()
            .filter_map(|entry| if let XrefEntry::Free(u) = entry { Some(u) } else { None })
    }
}

impl From<Vec<XrefEntry>> for Xref {
    fn from(v: Vec<XrefEntry>) -> Self {
        Xref(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreeObject {
    /// Number of this object
    pub number: usize,
    /// Next generation number that should be used
    pub generation: u32,
    /// Next free object number
    pub next_free: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsedObject {
    /// Number of this object
    pub number: usize,
    /// The position of this object in the pdf file in bytes, starting from the
    /// beginning of the PDF.
    pub byte_offset: usize,
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum XrefEntry {
    Free(FreeObject),
    Used(UsedObject),
}

impl XrefEntry {
    pub fn number(&self) -> usize {
        match self {
            XrefEntry::Free(FreeObject { number, .. }) => *number,
            XrefEntry::Used(UsedObject { number, .. }) => *number,
        }
    }
}

impl From<UsedObject> for XrefEntry {
    fn from(v: UsedObject) -> Self {
        Self::Used(v)
    }
}

impl From<FreeObject> for XrefEntry {
    fn from(v: FreeObject) -> Self {
        Self::Free(v)
    }
}
