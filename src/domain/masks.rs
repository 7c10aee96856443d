//! Live input masks and date form conversions.

/// Maximum length of a fully formatted CPF (`###.###.###-##`).
pub const CPF_MAX_LEN: usize = 14;

const CPF_DIGITS: usize = 11;
const PHONE_DIGITS: usize = 11;
const DATE_DIGITS: usize = 8;

fn digits(input: &str, limit: usize) -> Vec<char> {
    input.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Reformats typed CPF input as `###.###.###-##`, keeping digits only.
///
/// Separators appear progressively as digits are typed.
#[must_use]
pub fn format_cpf(input: &str) -> String {
    let digits = digits(input, CPF_DIGITS);
    let mut out = String::with_capacity(CPF_MAX_LEN);

    for (i, d) in digits.into_iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(d);
    }

    out
}

/// Reformats typed phone input as `(00) 00000-0000`.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits = digits(input, PHONE_DIGITS);
    let mut out = String::new();

    for (i, d) in digits.into_iter().enumerate() {
        match i {
            0 => out.push('('),
            2 => out.push_str(") "),
            7 => out.push('-'),
            _ => {}
        }
        out.push(d);
    }

    out
}

/// Reformats typed date input as `DD/MM/YYYY`.
#[must_use]
pub fn format_date_input(input: &str) -> String {
    let digits = digits(input, DATE_DIGITS);
    let mut out = String::new();

    for (i, d) in digits.into_iter().enumerate() {
        if i == 2 || i == 4 {
            out.push('/');
        }
        out.push(d);
    }

    out
}

/// Converts a backend date (`YYYY-MM-DD`, optionally followed by `T...`) to
/// `DD/MM/YYYY`.
///
/// Input without `-` separators, or without exactly three parts, is returned
/// unchanged.
#[must_use]
pub fn to_display_date(date: &str) -> String {
    if !date.contains('-') {
        return date.to_string();
    }

    let parts: Vec<&str> = date.splitn(3, '-').collect();
    let [year, month, day_with_time] = parts.as_slice() else {
        return date.to_string();
    };
    let day = day_with_time.split('T').next().unwrap_or(day_with_time);

    format!("{day}/{month}/{year}")
}

/// Converts a display date (`DD/MM/YYYY`) to the backend form `YYYY-MM-DD`.
///
/// Input without `/` separators, or without exactly three parts, is returned
/// unchanged.
#[must_use]
pub fn to_api_date(date: &str) -> String {
    if !date.contains('/') {
        return date.to_string();
    }

    let parts: Vec<&str> = date.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return date.to_string();
    };

    format!("{year}-{month}-{day}")
}

/// Keeps only the digits of `input`.
#[must_use]
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "" ; "empty")]
    #[test_case("123", "123" ; "first group")]
    #[test_case("1234", "123.4" ; "second group starts")]
    #[test_case("1234567", "123.456.7" ; "third group starts")]
    #[test_case("1234567890", "123.456.789-0" ; "check digits start")]
    #[test_case("12345678901", "123.456.789-01" ; "complete")]
    #[test_case("123456789012345", "123.456.789-01" ; "extra digits dropped")]
    #[test_case("a1b2c3.4-5 6x7!8@9#0$1", "123.456.789-01" ; "noise removed")]
    #[test_case("123.456.789-01", "123.456.789-01" ; "already formatted")]
    fn test_format_cpf(input: &str, expected: &str) {
        assert_eq!(format_cpf(input), expected);
    }

    #[test]
    fn test_format_cpf_length_bound() {
        for input in ["", "9", "abc", "98765432100123", "1-2-3-4-5-6-7-8-9-0-1-2"] {
            let formatted = format_cpf(input);
            assert!(formatted.len() <= CPF_MAX_LEN);
            assert!(
                formatted
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
            );
        }
    }

    #[test_case("11987654321", "(11) 98765-4321" ; "complete")]
    #[test_case("119", "(11) 9" ; "partial")]
    #[test_case("", "" ; "empty")]
    fn test_format_phone(input: &str, expected: &str) {
        assert_eq!(format_phone(input), expected);
    }

    #[test_case("20051990", "20/05/1990" ; "complete")]
    #[test_case("2005", "20/05" ; "partial")]
    #[test_case("20/05/1990", "20/05/1990" ; "already formatted")]
    fn test_format_date_input(input: &str, expected: &str) {
        assert_eq!(format_date_input(input), expected);
    }

    #[test_case("1990-05-20", "20/05/1990" ; "plain")]
    #[test_case("1990-05-20T00:00:00.000Z", "20/05/1990" ; "with time")]
    #[test_case("20/05/1990", "20/05/1990" ; "already display form")]
    #[test_case("", "" ; "empty")]
    fn test_to_display_date(input: &str, expected: &str) {
        assert_eq!(to_display_date(input), expected);
    }

    #[test_case("20/05/1990", "1990-05-20" ; "plain")]
    #[test_case("1990-05-20", "1990-05-20" ; "already api form")]
    #[test_case("20/05", "20/05" ; "incomplete left unchanged")]
    fn test_to_api_date(input: &str, expected: &str) {
        assert_eq!(to_api_date(input), expected);
    }

    #[test]
    fn test_date_round_trip() {
        for date in ["1990-05-20", "2000-01-01", "1985-12-31", "2024-02-29"] {
            assert_eq!(to_api_date(&to_display_date(date)), date);
        }
    }
}
