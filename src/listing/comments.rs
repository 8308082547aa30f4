use super::AnnotationSink;
use crate::addr::Addr;
use std::collections::BTreeMap;

//===========================================================================//

/// An in-memory store of end-of-line comments, keyed by address.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Comments {
    eol: BTreeMap<Addr, String>,
    overwritten: usize,
}

impl Comments {
    /// Returns an empty comment store.
    pub fn new() -> Comments {
        Comments { eol: BTreeMap::new(), overwritten: 0 }
    }

    /// Returns the end-of-line comment at the given address, if any.
    pub fn get(&self, addr: Addr) -> Option<&str> {
        self.eol.get(&addr).map(String::as_str)
    }

    /// Returns the number of addresses that have a comment.
    pub fn len(&self) -> usize {
        self.eol.len()
    }

    /// Returns true if no address has a comment.
    pub fn is_empty(&self) -> bool {
        self.eol.is_empty()
    }

    /// Returns the number of times a comment replaced one that was already
    /// set at the same address.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Returns an iterator over all comments in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (Addr, &str)> + '_ {
        self.eol.iter().map(|(&addr, text)| (addr, text.as_str()))
    }
}

impl AnnotationSink for Comments {
    fn set_eol_comment(&mut self, addr: Addr, text: &str) {
        if self.eol.insert(addr, text.to_string()).is_some() {
            self.overwritten += 1;
        }
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::Comments;
    use crate::addr::Addr;
    use crate::listing::AnnotationSink;

    #[test]
    fn set_comment_overwrites() {
        let mut comments = Comments::new();
        assert!(comments.is_empty());
        assert_eq!(comments.overwritten(), 0);
        comments.set_eol_comment(Addr::from(0x10u16), "first");
        comments.set_eol_comment(Addr::from(0x10u16), "second");
        comments.set_eol_comment(Addr::from(0x08u16), "other");
        assert_eq!(comments.len(), 2);
        assert_eq!(comments.overwritten(), 1);
        assert_eq!(comments.get(Addr::from(0x10u16)), Some("second"));
        assert_eq!(comments.get(Addr::from(0x0cu16)), None);
        assert_eq!(
            comments.iter().collect::<Vec<_>>(),
            vec![
                (Addr::from(0x08u16), "other"),
                (Addr::from(0x10u16), "second"),
            ]
        );
    }
}

//===========================================================================//
