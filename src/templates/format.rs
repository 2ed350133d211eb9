// templates/format.rs
use chrono::NaiveDate;

/// Rupee amount with Indian digit grouping: 123456 -> "₹1,23,456".
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    if digits.len() <= 3 {
        return format!("₹{sign}{digits}");
    }

    // Last three digits, then groups of two.
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{sign}{},{tail}", groups.join(","))
}

/// Day/month/year, as the receipt shows it.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Value for `<input type="date">`.
pub fn input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
