use serde::{Deserialize, Serialize};

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// US dollar formatting with two decimals, e.g. `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Whole amount with thousands separators, e.g. `12,500`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.abs().round() as u64;
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(rounded))
}

pub fn format_large_number(num: f64) -> String {
    if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Return-to-player band of weighted wager against raw wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RtpClass {
    High,
    Medium,
    Low,
}

impl RtpClass {
    pub fn from_wagers(weighted: f64, original: f64) -> Self {
        if original <= 0.0 {
            return Self::Low;
        }
        let percentage = weighted / original * 100.0;
        if percentage >= 100.0 {
            Self::High
        } else if percentage >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "rtp-high",
            Self::Medium => "rtp-medium",
            Self::Low => "rtp-low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.129), "-$42.13");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(12_500.0), "12,500");
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(1_500_000.0), "1.50M");
        assert_eq!(format_large_number(2_000.0), "2.00K");
        assert_eq!(format_large_number(999.0), "999");
        assert_eq!(format_large_number(12.5), "12.5");
    }

    #[test]
    fn test_rtp_class() {
        assert_eq!(RtpClass::from_wagers(120.0, 100.0), RtpClass::High);
        assert_eq!(RtpClass::from_wagers(50.0, 100.0), RtpClass::Medium);
        assert_eq!(RtpClass::from_wagers(10.0, 100.0), RtpClass::Low);
        assert_eq!(RtpClass::from_wagers(10.0, 0.0).css_class(), "rtp-low");
    }
}
