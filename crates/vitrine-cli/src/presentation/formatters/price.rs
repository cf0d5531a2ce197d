/// Brazilian-real label: `R$ ` plus two decimals with a comma separator.
///
/// No thousands grouping, matching what the catalog has always shown.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", fixed_cents(value).replace('.', ","))
}

/// Two decimals, with exact half-cent ties going to the larger value.
///
/// `{:.2}` rounds ties to even. A tie is only possible for odd multiples of
/// 1/8, where both scalings below are exact.
fn fixed_cents(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", value)
}

/// Discount badge text, `None` when there is nothing to advertise.
pub fn format_discount(percent: u32) -> Option<String> {
    (percent > 0).then(|| format!("-{}%", percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(19.9), "R$ 19,90");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1299.0), "R$ 1299,00");
    }

    #[test]
    fn test_format_brl_half_cent_ties_round_up() {
        assert_eq!(format_brl(19.125), "R$ 19,13");
        assert_eq!(format_brl(0.125), "R$ 0,13");
        assert_eq!(format_brl(4.375), "R$ 4,38");
        assert_eq!(format_brl(10.625), "R$ 10,63");
        assert_eq!(format_brl(0.875), "R$ 0,88");
    }

    #[test]
    fn test_format_brl_near_ties_follow_stored_value() {
        // 2.675 and 1.005 are stored slightly below the written value.
        assert_eq!(format_brl(2.675), "R$ 2,67");
        assert_eq!(format_brl(1.005), "R$ 1,00");
        assert_eq!(format_brl(19.126), "R$ 19,13");
    }

    #[test]
    fn test_format_discount() {
        assert_eq!(format_discount(20).as_deref(), Some("-20%"));
        assert_eq!(format_discount(0), None);
    }
}
