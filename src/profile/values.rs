//! Typed access to stored raw values.
//!
//! Every accessor family runs through one generic presence/default core,
//! so the defaulting rules are identical across types:
//!
//! - the key is absent (or the section/instance does not exist): the
//!   caller's default is returned with `found == false`;
//! - at least one raw value exists: `found == true`, and the first value
//!   is converted. A value that fails to convert yields the type's
//!   zero-equivalent (0, 0.0, `false`, the null time, the unspecified
//!   address), never the default. Presence and convertibility are
//!   deliberately distinct signals.
//!
//! The `*_values` variants convert every stored raw value in encounter
//! order and return an empty vector when the key is absent.

use std::net::{IpAddr, Ipv4Addr};

use chrono::NaiveTime;

use super::Profile;

/// Result of a single-value lookup: the converted (or defaulted) value
/// plus a presence flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup<T> {
    /// Converted first value, or the caller-supplied default when absent.
    pub value: T,
    /// True iff at least one raw value exists for the key, regardless of
    /// whether it converted successfully.
    pub found: bool,
}

impl Profile {
    fn first_with<T>(
        &self,
        section: &str,
        id: &str,
        tag: &str,
        default: T,
        convert: impl FnOnce(&str) -> T,
    ) -> Lookup<T> {
        match self
            .raw_values_in(section, id, tag)
            .and_then(<[String]>::first)
        {
            Some(raw) => Lookup {
                value: convert(raw.as_str()),
                found: true,
            },
            None => Lookup {
                value: default,
                found: false,
            },
        }
    }

    fn all_with<T>(
        &self,
        section: &str,
        id: &str,
        tag: &str,
        convert: impl Fn(&str) -> T,
    ) -> Vec<T> {
        self.raw_values_in(section, id, tag)
            .map(|values| values.iter().map(|raw| convert(raw.as_str())).collect())
            .unwrap_or_default()
    }

    /// Returns the first string value for a key in the anonymous instance,
    /// or `default` when the key is absent.
    #[must_use]
    pub fn string_value(&self, section: &str, tag: &str, default: &str) -> Lookup<String> {
        self.string_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::string_value`].
    #[must_use]
    pub fn string_value_in(
        &self,
        section: &str,
        id: &str,
        tag: &str,
        default: &str,
    ) -> Lookup<String> {
        self.first_with(section, id, tag, default.to_owned(), str::to_owned)
    }

    /// Returns every string value for a key, in encounter order.
    #[must_use]
    pub fn string_values(&self, section: &str, tag: &str) -> Vec<String> {
        self.string_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::string_values`].
    #[must_use]
    pub fn string_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<String> {
        self.all_with(section, id, tag, str::to_owned)
    }

    /// Returns the first value for a key converted as a decimal integer.
    ///
    /// Unparseable text converts to 0 with `found == true`.
    #[must_use]
    pub fn int_value(&self, section: &str, tag: &str, default: i64) -> Lookup<i64> {
        self.int_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::int_value`].
    #[must_use]
    pub fn int_value_in(&self, section: &str, id: &str, tag: &str, default: i64) -> Lookup<i64> {
        self.first_with(section, id, tag, default, to_int)
    }

    /// Returns every value for a key converted as a decimal integer.
    #[must_use]
    pub fn int_values(&self, section: &str, tag: &str) -> Vec<i64> {
        self.int_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::int_values`].
    #[must_use]
    pub fn int_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<i64> {
        self.all_with(section, id, tag, to_int)
    }

    /// Returns the first value for a key converted as a base-16 integer.
    ///
    /// Accepts bare hex digits or an optional `0x`/`0X` prefix, with an
    /// optional leading sign. Unparseable text converts to 0.
    #[must_use]
    pub fn hex_value(&self, section: &str, tag: &str, default: i64) -> Lookup<i64> {
        self.hex_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::hex_value`].
    #[must_use]
    pub fn hex_value_in(&self, section: &str, id: &str, tag: &str, default: i64) -> Lookup<i64> {
        self.first_with(section, id, tag, default, to_hex)
    }

    /// Returns every value for a key converted as a base-16 integer.
    #[must_use]
    pub fn hex_values(&self, section: &str, tag: &str) -> Vec<i64> {
        self.hex_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::hex_values`].
    #[must_use]
    pub fn hex_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<i64> {
        self.all_with(section, id, tag, to_hex)
    }

    /// Returns the first value for a key converted as a float.
    #[must_use]
    pub fn double_value(&self, section: &str, tag: &str, default: f64) -> Lookup<f64> {
        self.double_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::double_value`].
    #[must_use]
    pub fn double_value_in(&self, section: &str, id: &str, tag: &str, default: f64) -> Lookup<f64> {
        self.first_with(section, id, tag, default, to_double)
    }

    /// Returns every value for a key converted as a float.
    #[must_use]
    pub fn double_values(&self, section: &str, tag: &str) -> Vec<f64> {
        self.double_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::double_values`].
    #[must_use]
    pub fn double_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<f64> {
        self.all_with(section, id, tag, to_double)
    }

    /// Returns the first value for a key converted as a boolean.
    ///
    /// `yes`, `true`, `on`, and `1` (case-insensitive) convert to true;
    /// any other present value converts to false, not to the default.
    #[must_use]
    pub fn bool_value(&self, section: &str, tag: &str, default: bool) -> Lookup<bool> {
        self.bool_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::bool_value`].
    #[must_use]
    pub fn bool_value_in(&self, section: &str, id: &str, tag: &str, default: bool) -> Lookup<bool> {
        self.first_with(section, id, tag, default, to_bool)
    }

    /// Returns every value for a key converted as a boolean.
    #[must_use]
    pub fn bool_values(&self, section: &str, tag: &str) -> Vec<bool> {
        self.bool_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::bool_values`].
    #[must_use]
    pub fn bool_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<bool> {
        self.all_with(section, id, tag, to_bool)
    }

    /// Returns the first value for a key converted as a time of day.
    ///
    /// Accepts `H:M` or `H:M:S` with integer fields. Any other shape, or
    /// out-of-range components, converts to `None` (the null time) rather
    /// than the default.
    #[must_use]
    pub fn time_value(
        &self,
        section: &str,
        tag: &str,
        default: Option<NaiveTime>,
    ) -> Lookup<Option<NaiveTime>> {
        self.time_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::time_value`].
    #[must_use]
    pub fn time_value_in(
        &self,
        section: &str,
        id: &str,
        tag: &str,
        default: Option<NaiveTime>,
    ) -> Lookup<Option<NaiveTime>> {
        self.first_with(section, id, tag, default, to_time)
    }

    /// Returns every value for a key converted as a time of day.
    #[must_use]
    pub fn time_values(&self, section: &str, tag: &str) -> Vec<Option<NaiveTime>> {
        self.time_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::time_values`].
    #[must_use]
    pub fn time_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<Option<NaiveTime>> {
        self.all_with(section, id, tag, to_time)
    }

    /// Returns the first value for a key converted as an IP address.
    ///
    /// Invalid text converts to the unspecified address (`0.0.0.0`).
    #[must_use]
    pub fn address_value(&self, section: &str, tag: &str, default: IpAddr) -> Lookup<IpAddr> {
        self.address_value_in(section, "", tag, default)
    }

    /// Instance-qualified variant of [`Profile::address_value`].
    #[must_use]
    pub fn address_value_in(
        &self,
        section: &str,
        id: &str,
        tag: &str,
        default: IpAddr,
    ) -> Lookup<IpAddr> {
        self.first_with(section, id, tag, default, to_address)
    }

    /// Returns every value for a key converted as an IP address.
    #[must_use]
    pub fn address_values(&self, section: &str, tag: &str) -> Vec<IpAddr> {
        self.address_values_in(section, "", tag)
    }

    /// Instance-qualified variant of [`Profile::address_values`].
    #[must_use]
    pub fn address_values_in(&self, section: &str, id: &str, tag: &str) -> Vec<IpAddr> {
        self.all_with(section, id, tag, to_address)
    }
}

fn to_int(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}

fn to_hex(raw: &str) -> i64 {
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    match i64::from_str_radix(digits, 16) {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

fn to_double(raw: &str) -> f64 {
    raw.parse().unwrap_or(0.0)
}

fn to_bool(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "yes" | "true" | "on" | "1"
    )
}

fn to_time(raw: &str) -> Option<NaiveTime> {
    // Each colon-separated field coerces to an integer, with non-numeric
    // text reading as 0; range checking happens at construction.
    let fields: Vec<i64> = raw
        .split(':')
        .map(|field| field.trim().parse().unwrap_or(0))
        .collect();
    match fields.as_slice() {
        [h, m] => hms(*h, *m, 0),
        [h, m, s] => hms(*h, *m, *s),
        _ => None,
    }
}

fn hms(h: i64, m: i64, s: i64) -> Option<NaiveTime> {
    let h = u32::try_from(h).ok()?;
    let m = u32::try_from(m).ok()?;
    let s = u32::try_from(s).ok()?;
    NaiveTime::from_hms_opt(h, m, s)
}

fn to_address(raw: &str) -> IpAddr {
    raw.parse()
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

#[cfg(test)]
mod conversion_tests {
    use super::*;

    #[test]
    fn int_parses_decimal_and_zeroes_garbage() {
        assert_eq!(to_int("1234"), 1234);
        assert_eq!(to_int("-56"), -56);
        assert_eq!(to_int("12ab"), 0);
        assert_eq!(to_int(""), 0);
    }

    #[test]
    fn hex_accepts_bare_and_prefixed_digits() {
        assert_eq!(to_hex("4d2"), 1234);
        assert_eq!(to_hex("0x4D2"), 1234);
        assert_eq!(to_hex("0X11d7"), 4567);
        assert_eq!(to_hex("-ff"), -255);
        assert_eq!(to_hex("wxyz"), 0);
    }

    #[test]
    fn bool_tokens_are_case_insensitive() {
        for token in ["yes", "YES", "true", "True", "on", "ON", "1"] {
            assert!(to_bool(token), "{token} should read as true");
        }
        for token in ["no", "off", "false", "0", "2", "anything", ""] {
            assert!(!to_bool(token), "{token} should read as false");
        }
    }

    #[test]
    fn time_accepts_two_and_three_fields() {
        assert_eq!(to_time("9:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(to_time("21:30:45"), NaiveTime::from_hms_opt(21, 30, 45));
    }

    #[test]
    fn time_rejects_other_shapes() {
        assert_eq!(to_time("morning"), None);
        assert_eq!(to_time("9"), None);
        assert_eq!(to_time("1:2:3:4"), None);
        assert_eq!(to_time("25:00"), None);
        assert_eq!(to_time("-1:30"), None);
    }

    #[test]
    fn address_falls_back_to_unspecified() {
        assert_eq!(to_address("1.2.3.4"), IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(to_address("::1"), "::1".parse::<IpAddr>().unwrap());
        assert_eq!(to_address("not-an-ip"), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }
}
