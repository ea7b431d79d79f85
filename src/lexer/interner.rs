/// Append-only table of distinct strings. An entry's index never changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interner {
    entries: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Linear lookup; the tables of a single source file stay small.
    pub fn intern(&mut self, s: &str) -> usize {
        if let Some(index) = self.entries.iter().position(|e| e == s) {
            return index;
        }
        self.entries.push(s.to_string());
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(String::as_str).enumerate()
    }
}
