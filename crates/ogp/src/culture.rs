//! Locale-aware numeric formatting.
//!
//! A [`Culture`] captures the two conventions that matter for rendering a
//! number as text: the decimal separator and digit grouping. Presets cover
//! the invariant culture and a few common locales; anything else is a plain
//! struct literal away.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Numeric formatting conventions of a locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    /// Separator between the integer and fractional parts.
    pub decimal_sep: char,
    /// Separator between digit groups, if the locale groups digits.
    pub group_sep: Option<char>,
    /// Digits per group, counted from the least-significant digit.
    pub group_size: u8,
}

impl Culture {
    /// Culture-neutral formatting: `.` decimal separator, no grouping.
    pub const fn invariant() -> Self {
        Self {
            decimal_sep: '.',
            group_sep: None,
            group_size: 3,
        }
    }

    /// United States English: `1,234,567.5`.
    pub const fn en_us() -> Self {
        Self {
            decimal_sep: '.',
            group_sep: Some(','),
            group_size: 3,
        }
    }

    /// German: `1.234.567,5`.
    pub const fn de_de() -> Self {
        Self {
            decimal_sep: ',',
            group_sep: Some('.'),
            group_size: 3,
        }
    }

    /// French: no-break-space grouping, comma decimal separator.
    pub const fn fr_fr() -> Self {
        Self {
            decimal_sep: ',',
            group_sep: Some('\u{a0}'),
            group_size: 3,
        }
    }

    /// Russian: no-break-space grouping, comma decimal separator.
    pub const fn ru_ru() -> Self {
        Self {
            decimal_sep: ',',
            group_sep: Some('\u{a0}'),
            group_size: 3,
        }
    }

    /// Reformat a number's default `Display` output under this culture.
    ///
    /// `text` is expected to be an optional `-`, digits, and an optional
    /// fractional part after `.`. Anything else (`NaN`, `inf`) is returned
    /// unchanged.
    pub fn format_number(&self, text: &str) -> String {
        let (sign, rest) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text),
        };
        let (int_part, fraction) = match rest.split_once('.') {
            Some((int_part, fraction)) => (int_part, Some(fraction)),
            None => (rest, None),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return text.to_string();
        }

        let mut out = String::from(sign);
        out.push_str(&self.group_digits(int_part));
        if let Some(fraction) = fraction {
            out.push(self.decimal_sep);
            out.push_str(fraction);
        }
        out
    }

    fn group_digits(&self, digits: &str) -> String {
        let Some(sep) = self.group_sep else {
            return digits.to_string();
        };
        let size = usize::from(self.group_size.max(1));
        let count = digits.len();
        let mut out = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (count - i) % size == 0 {
                out.push(sep);
            }
            out.push(c);
        }
        out
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

pub(crate) type CultureRenderer = fn(&dyn Any, &Culture) -> Option<String>;

fn render<V: Any + ToString>(value: &dyn Any, culture: &Culture) -> Option<String> {
    value
        .downcast_ref::<V>()
        .map(|v| culture.format_number(&v.to_string()))
}

static NUMERIC: LazyLock<HashMap<TypeId, CultureRenderer>> = LazyLock::new(|| {
    let mut table: HashMap<TypeId, CultureRenderer> = HashMap::new();
    macro_rules! entry {
        ($($ty:ty),+ $(,)?) => {
            $( table.insert(TypeId::of::<$ty>(), render::<$ty>); )+
        };
    }
    entry!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);
    table
});

/// The culture renderer for `id`, or `None` if the type is not numeric.
pub(crate) fn renderer_for(id: TypeId) -> Option<CultureRenderer> {
    NUMERIC.get(&id).copied()
}
