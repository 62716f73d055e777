use lazy_static::lazy_static;
use std::ops::RangeInclusive;

#[derive(Clone)]
pub struct CharFilter {
    table: [bool; 256],
}

impl CharFilter {
    pub fn new() -> CharFilter {
        CharFilter {
            table: [false; 256],
        }
    }

    pub fn add_chars(&mut self, chars: RangeInclusive<u8>) -> () {
        for c in chars {
            self.table[c as usize] = true;
        }
    }

    pub fn has(&self, c: u8) -> bool {
        self.table[c as usize]
    }
}

lazy_static! {
    pub static ref DIGIT_HEX: CharFilter = {
        let mut filter = CharFilter::new();
        filter.add_chars(b'0'..=b'9');
        filter.add_chars(b'a'..=b'f');
        filter.add_chars(b'A'..=b'F');
        filter
    };

    pub static ref DIGIT_OCT: CharFilter = {
        let mut filter = CharFilter::new();
        filter.add_chars(b'0'..=b'7');
        filter
    };
}
