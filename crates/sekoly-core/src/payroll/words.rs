/// Verbalize an integer ariary amount the way the printed receipts and
/// payslips phrase it (Malagasy-French).
///
/// Below one million the amount reads as thousands plus remainder
/// ("450 mille ariary"); at or above, as millions plus thousands plus
/// remainder ("1 million 250 mille 500 ariary"). Zero-valued parts are
/// omitted. Purely presentational.
pub fn amount_in_words(amount: i64) -> String {
    let n = amount.max(0);
    if n == 0 {
        return "0 ariary".to_string();
    }

    let millions = n / 1_000_000;
    let thousands = (n % 1_000_000) / 1_000;
    let remainder = n % 1_000;

    let mut parts: Vec<String> = Vec::new();
    if millions > 0 {
        let suffix = if millions > 1 { "millions" } else { "million" };
        parts.push(format!("{} {}", millions, suffix));
    }
    if thousands > 0 {
        parts.push(format!("{} mille", thousands));
    }
    if remainder > 0 {
        parts.push(remainder.to_string());
    }
    parts.push("ariary".to_string());
    parts.join(" ")
}
