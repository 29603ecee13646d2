//! Matching of convention-named initializers.
//!
//! A candidate name carries its order key inline: the literal prefix
//! `Initialize`, a run of decimal digits, then a free-form suffix of word
//! characters (`Initialize01Log`, `Initialize42Cache`). Anything else is
//! simply not an initializer name.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::InitError;

static ORDER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn order_pattern() -> &'static Regex {
    ORDER_PATTERN.get_or_init(|| {
        Regex::new(r"^Initialize(\d+)\w+").expect("hard-coded pattern is valid")
    })
}

/// Extracts the order key embedded in a convention-named initializer.
///
/// Returns `Ok(None)` when the name does not follow the convention at all,
/// and `Err(MalformedOrderKey)` when it does but its digit run overflows the
/// native integer range.
pub(crate) fn order_key(name: &str) -> Result<Option<isize>, InitError> {
    let Some(caps) = order_pattern().captures(name) else {
        return Ok(None);
    };
    let key = caps[1].parse::<isize>().map_err(|_| InitError::MalformedOrderKey {
        name: name.to_string(),
    })?;
    Ok(Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_key_from_conforming_name() {
        assert_eq!(order_key("Initialize01Log").unwrap(), Some(1));
        assert_eq!(order_key("Initialize42Cache").unwrap(), Some(42));
        assert_eq!(order_key("Initialize007Bond").unwrap(), Some(7));
    }

    #[test]
    fn rejects_names_without_the_prefix() {
        assert_eq!(order_key("SetupLog").unwrap(), None);
        assert_eq!(order_key("initialize01Log").unwrap(), None);
        assert_eq!(order_key("PreInitialize01Log").unwrap(), None);
    }

    #[test]
    fn rejects_prefix_without_digits() {
        assert_eq!(order_key("InitializeLog").unwrap(), None);
        assert_eq!(order_key("Initialize").unwrap(), None);
    }

    #[test]
    fn digit_run_must_be_followed_by_a_suffix() {
        // With no word characters after the digits, the final digit itself
        // is consumed as the suffix, shortening the key.
        assert_eq!(order_key("Initialize10").unwrap(), Some(1));
        assert_eq!(order_key("Initialize5").unwrap(), None);
    }

    #[test]
    fn overflowing_digit_run_is_a_configuration_error() {
        let name = "Initialize99999999999999999999999999Huge";
        assert_eq!(
            order_key(name),
            Err(InitError::MalformedOrderKey {
                name: name.to_string()
            })
        );
    }
}
