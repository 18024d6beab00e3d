use crate::models::Features;

pub fn shorten_address(address: &str, chars: usize) -> String {
    let len = address.chars().count();
    if address.is_empty() || len <= chars * 2 {
        return address.to_string();
    }
    let head: String = address.chars().take(chars).collect();
    let tail: String = address.chars().skip(len - chars).collect();
    format!("{}...{}", head, tail)
}

/// `1.5M`, `12.3K`, or the plain number.
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else {
        format!("{}", num)
    }
}

/// Whole US dollars with thousands separators.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Human label and formatted value for a known feature key.
pub fn describe_feature(key: &str, value: f64) -> (String, String) {
    let (label, formatted) = match key {
        Features::LST_PERCENTILE => ("LST Holdings", format!("{:.1}%", value)),
        Features::MAJOR_PERCENTILE => ("Major Tokens", format!("{:.1}%", value)),
        Features::NATIVE_SOL_PERCENTILE => ("Native SOL", format!("{:.1}%", value)),
        Features::STABLE_PERCENTILE => ("Stablecoins", format!("{:.1}%", value)),
        Features::TX_COUNT => ("Transactions", format_number(value)),
        Features::ACTIVE_DAYS => ("Active Days", format!("{} days", value.round())),
        Features::MEDIAN_GAP_HOURS => ("Median Gap", format!("{:.1}h", value)),
        Features::WALLET_AGE_DAYS => ("Wallet Age", format!("{} days", value.round())),
        other => return (other.to_string(), value.to_string()),
    };
    (label.to_string(), formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU", 4),
            "7xKX...gAsU"
        );
        assert_eq!(shorten_address("ABC123", 4), "ABC123");
        assert_eq!(shorten_address("", 4), "");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1_520.0), "1.5K");
        assert_eq!(format_number(2_400_000.0), "2.4M");
        assert_eq!(format_number(42.0), "42");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(250_000.0), "$250,000");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-1_500.0), "-$1,500");
    }

    #[test]
    fn test_describe_feature() {
        assert_eq!(describe_feature("tx_count", 1520.0), ("Transactions".to_string(), "1.5K".to_string()));
        assert_eq!(describe_feature("active_days", 209.6), ("Active Days".to_string(), "210 days".to_string()));
        assert_eq!(describe_feature("custom", 3.5), ("custom".to_string(), "3.5".to_string()));
    }
}
