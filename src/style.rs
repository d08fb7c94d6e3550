use std::borrow::Cow;
use std::sync::atomic::{AtomicU8, Ordering};

// -----------------------------------------------------------------------------
// KeyStyle

/// The naming convention applied to output mapping keys derived from field
/// names.
///
/// Resolved per composite through [`Composite::key_style`], whose provided
/// default reads the process-wide cell ([`default_key_style`]). Keys
/// returned by an overridden
/// [`key_for_field`](crate::Composite::key_for_field) hook bypass the style
/// entirely.
///
/// [`Composite::key_style`]: crate::Composite::key_style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
    /// Use the field name verbatim.
    #[default]
    MatchFieldName,
    /// Convert the field name to snake_case.
    SnakeCase,
}

impl KeyStyle {
    /// Applies this style to a field name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wrapmap::KeyStyle;
    ///
    /// assert_eq!(KeyStyle::MatchFieldName.apply("myProperty"), "myProperty");
    /// assert_eq!(KeyStyle::SnakeCase.apply("myProperty"), "my_property");
    /// ```
    pub fn apply(self, name: &str) -> Cow<'_, str> {
        match self {
            KeyStyle::MatchFieldName => Cow::Borrowed(name),
            KeyStyle::SnakeCase => Cow::Owned(to_snake_case(name)),
        }
    }
}

/// Inserts an underscore before each uppercase letter that is preceded or
/// followed by a lowercase letter (never at the start), then lowercases the
/// whole string. Existing underscores are preserved and never doubled up by
/// the lowercasing pass.
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev_lower || next_lower {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

// -----------------------------------------------------------------------------
// Process-wide default

static DEFAULT_KEY_STYLE: AtomicU8 = AtomicU8::new(0);

/// Returns the process-wide default [`KeyStyle`].
///
/// This is what [`Composite::key_style`](crate::Composite::key_style)
/// resolves to for composites that do not override the hook. It starts as
/// [`KeyStyle::MatchFieldName`].
pub fn default_key_style() -> KeyStyle {
    match DEFAULT_KEY_STYLE.load(Ordering::Relaxed) {
        1 => KeyStyle::SnakeCase,
        _ => KeyStyle::MatchFieldName,
    }
}

/// Sets the process-wide default [`KeyStyle`].
///
/// This is the crate's only global mutable state. Treat it as
/// set-once-at-startup: concurrent top-level conversions expecting different
/// defaults must override [`Composite::key_style`] per type instead.
///
/// [`Composite::key_style`]: crate::Composite::key_style
pub fn set_default_key_style(style: KeyStyle) {
    let raw = match style {
        KeyStyle::MatchFieldName => 0,
        KeyStyle::SnakeCase => 1,
    };
    DEFAULT_KEY_STYLE.store(raw, Ordering::Relaxed);
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::to_snake_case;

    #[test]
    fn lower_camel_case_gets_split() {
        assert_eq!(to_snake_case("myProperty"), "my_property");
        assert_eq!(to_snake_case("myLongerPropertyName"), "my_longer_property_name");
    }

    #[test]
    fn all_caps_is_only_lowercased() {
        assert_eq!(to_snake_case("CAPITALIZED"), "capitalized");
    }

    #[test]
    fn existing_underscores_are_preserved() {
        assert_eq!(to_snake_case("_underscored"), "_underscored");
        assert_eq!(to_snake_case("center_underscored"), "center_underscored");
        assert_eq!(to_snake_case("double__underscored"), "double__underscored");
    }

    #[test]
    fn acronym_boundaries_split_once() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("requestURL"), "request_url");
    }
}
