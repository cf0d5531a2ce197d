/// Percentage off `old_price`, rounded half away from zero.
///
/// Zero whenever there is no old price or it does not exceed `price`.
pub fn discount_percent(price: f64, old_price: Option<f64>) -> u32 {
    match old_price {
        Some(old) if old > price && old > 0.0 => {
            let pct = ((old - price) / old * 100.0).round();
            pct.clamp(0.0, 100.0) as u32
        }
        _ => 0,
    }
}
