use rand::Rng;
use uuid::Uuid;

/// `FR` followed by 12 uppercase hex characters.
pub fn generate_order_number() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("FR{}", &hex[..12])
}

/// `FRESH{user_id}` followed by 6 uppercase hex characters.
pub fn generate_referral_code(user_id: i64) -> String {
    let mut rng = rand::thread_rng();
    format!("FRESH{}{:06X}", user_id, rng.gen_range(0..=0xFF_FFFFu32))
}

/// Shareable code shown on the referral dashboard.
pub fn personal_referral_code(user_id: i64) -> String {
    format!("FRESH{user_id}LOVE")
}

/// Inverse of [`personal_referral_code`]; codes are matched case-insensitively.
pub fn parse_personal_referral_code(code: &str) -> Option<i64> {
    let code = code.trim().to_ascii_uppercase();
    code.strip_prefix("FRESH")?
        .strip_suffix("LOVE")?
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
}

/// `FB` + date + product id + 4 random digits, unique per preparation run.
pub fn generate_batch_number(date: chrono::NaiveDate, product_id: i64) -> String {
    let mut rng = rand::thread_rng();
    format!(
        "FB{}{:03}{:04}",
        date.format("%Y%m%d"),
        product_id,
        rng.gen_range(0..10_000u32)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_number_format() {
        let n = generate_order_number();
        assert_eq!(n.len(), 14);
        assert!(n.starts_with("FR"));
        assert!(
            n[2..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn test_order_numbers_differ() {
        let numbers: HashSet<String> = (0..100).map(|_| generate_order_number()).collect();
        assert_eq!(numbers.len(), 100);
    }

    #[test]
    fn test_referral_code_format() {
        let code = generate_referral_code(17);
        assert!(code.starts_with("FRESH17"));
        assert_eq!(code.len(), "FRESH17".len() + 6);
        assert_eq!(personal_referral_code(17), "FRESH17LOVE");
    }

    #[test]
    fn test_parse_personal_referral_code() {
        assert_eq!(parse_personal_referral_code(&personal_referral_code(17)), Some(17));
        assert_eq!(parse_personal_referral_code(" fresh17love "), Some(17));
        assert_eq!(parse_personal_referral_code(&generate_referral_code(17)), None);
        assert_eq!(parse_personal_referral_code("FRESHLOVE"), None);
        assert_eq!(parse_personal_referral_code("FRESH-3LOVE"), None);
    }
}
