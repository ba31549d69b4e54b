//! User-facing text in both chat languages.

use rihla_core::{FlightOffer, Language, ParseFailure, ParsedQuery};
use rihla_offer::SearchSummary;

use crate::reply::{Button, Keyboard};

pub const ACTION_LANG_EN: &str = "lang_en";
pub const ACTION_LANG_AR: &str = "lang_ar";
pub const ACTION_CHANGE_LANGUAGE: &str = "change_language";
pub const ACTION_NEW_SEARCH: &str = "new_search";
pub const ACTION_RESTART: &str = "restart";

pub const SELECT_LANGUAGE_FIRST: &str = "Please select language first / الرجاء اختيار اللغة أولاً";

pub fn welcome(lang: Language) -> &'static str {
    match lang {
        Language::En => "Welcome to the Flight Booking Bot!\nPlease select your language:",
        Language::Ar => "مرحبًا بكم في بوت حجز تذاكر الطيران!\nالرجاء اختيار اللغة:",
    }
}

pub fn language_selected(lang: Language) -> &'static str {
    match lang {
        Language::En => "English selected. Enter search like: Dubai London 25/04/2024",
        Language::Ar => "تم اختيار العربية. اكتب البحث مثال: دبي لندن 25/04/2024",
    }
}

pub fn new_search_prompt(lang: Language) -> &'static str {
    match lang {
        Language::En => "Enter your new search like: Dubai London 25/04/2024",
        Language::Ar => "اكتب البحث الجديد مثال: دبي لندن 25/04/2024",
    }
}

pub fn failure(lang: Language, failure: ParseFailure) -> &'static str {
    match (failure, lang) {
        (ParseFailure::Malformed, Language::En) => {
            "❌ Invalid format. Example: Dubai London 25/04/2024 or DXB LON 25/04/2024"
        }
        (ParseFailure::Malformed, Language::Ar) => {
            "❌ صيغة غير صحيحة. مثال: دبي لندن 25/04/2024 أو DXB LON 25/04/2024"
        }
        (ParseFailure::PastDate, Language::En) => "❌ Date cannot be in the past. Please enter a future date",
        (ParseFailure::PastDate, Language::Ar) => "❌ التاريخ لا يمكن أن يكون في الماضي. الرجاء إدخال تاريخ مستقبلي",
        (ParseFailure::ProcessingError, Language::En) => "Error processing your request. Please try again",
        (ParseFailure::ProcessingError, Language::Ar) => "حدث خطأ في معالجة طلبك. يرجى المحاولة مرة أخرى",
    }
}

pub fn no_flights(lang: Language) -> &'static str {
    match lang {
        Language::En => "❌ No flights found. Try different dates or cities",
        Language::Ar => "❌ لا توجد رحلات. حاول بتواريخ أو مدن أخرى",
    }
}

pub fn unexpected_error(lang: Language) -> &'static str {
    match lang {
        Language::En => "An unexpected error occurred. Restarting...",
        Language::Ar => "حدث خطأ غير متوقع. يتم إعادة التشغيل...",
    }
}

pub fn choose_next_action(lang: Language) -> &'static str {
    match lang {
        Language::En => "Choose your next action:",
        Language::Ar => "اختر الإجراء التالي:",
    }
}

/// Shows `original (corrected)` when the date had to be padded.
pub fn searching(lang: Language, query: &ParsedQuery) -> String {
    let date = if query.date_was_corrected() {
        format!("{} ({})", query.original_date, query.date)
    } else {
        query.date.clone()
    };

    match lang {
        Language::En => format!("🔍 Searching flights from {} to {} on {}...", query.from, query.to, date),
        Language::Ar => format!("🔍 يبحث عن رحلات من {} إلى {} في {}...", query.from, query.to, date),
    }
}

pub fn summary(lang: Language, summary: &SearchSummary) -> String {
    match lang {
        Language::En => format!(
            "🔍 Found {} flights ({} direct, {} with transfers)",
            summary.total, summary.direct, summary.with_transfers
        ),
        Language::Ar => format!(
            "🔍 وجدنا {} رحلة ({} مباشرة، {} مع ترانزيت)",
            summary.total, summary.direct, summary.with_transfers
        ),
    }
}

pub fn format_duration(seconds: u64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Markdown card for one offer.
pub fn flight_card(lang: Language, flight: &FlightOffer) -> String {
    let duration = match (flight.duration_seconds, flight.duration_text.as_deref()) {
        (Some(total), _) => format_duration(total),
        (None, Some(text)) => text.to_string(),
        (None, None) => "-".to_string(),
    };

    let transfers = if flight.has_transfers() {
        let count = flight.transfer_count();
        let cities = flight.transfer_cities().join(", ");
        match lang {
            Language::En => format!("\n✈️ Transfers: {}\n🏙️ Via: {}", count, cities),
            Language::Ar => format!("\n✈️ عدد الترانزيت: {}\n🏙️ مدن الترانزيت: {}", count, cities),
        }
    } else {
        String::new()
    };

    match lang {
        Language::En => format!(
            "✈️ *{} Found!*\n🛫 From: {} ({}) → 🛬 To: {} ({}){}\n📅 Date: {}\n⏳ Duration: {}\n💰 Price: {} {}\n[🔗 Book Now]({})",
            if flight.has_transfers() { "Flight with Transfers" } else { "Direct Flight" },
            flight.origin_city, flight.origin_code, flight.destination_city, flight.destination_code,
            transfers, flight.departure_date, duration, flight.price, flight.currency, flight.deep_link,
        ),
        Language::Ar => format!(
            "✈️ *{}*\n🛫 من: {} ({}) → 🛬 إلى: {} ({}){}\n📅 التاريخ: {}\n⏳ المدة: {}\n💰 السعر: {} {}\n[🔗 احجز الآن]({})",
            if flight.has_transfers() { "رحلة مع ترانزيت" } else { "رحلة مباشرة" },
            flight.origin_city, flight.origin_code, flight.destination_city, flight.destination_code,
            transfers, flight.departure_date, duration, flight.price, flight.currency, flight.deep_link,
        ),
    }
}

/// Language picker. Labels follow `lang`; English when no language is chosen yet.
pub fn language_keyboard(lang: Language) -> Keyboard {
    let english = match lang {
        Language::En => "English 🇺🇸",
        Language::Ar => "الإنجليزية 🇺🇸",
    };
    vec![
        vec![Button::new(english, ACTION_LANG_EN)],
        vec![Button::new("العربية 🇸🇦", ACTION_LANG_AR)],
    ]
}

pub fn action_keyboard(lang: Language) -> Keyboard {
    let (change, new_search) = match lang {
        Language::En => ("Change Language", "New Search"),
        Language::Ar => ("تغيير اللغة", "بحث جديد"),
    };
    vec![vec![
        Button::new(change, ACTION_CHANGE_LANGUAGE),
        Button::new(new_search, ACTION_NEW_SEARCH),
    ]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rihla_core::RouteLeg;

    fn flight(route: &[(&str, &str)]) -> FlightOffer {
        FlightOffer {
            origin_city: "Dubai".to_string(),
            origin_code: "DXB".to_string(),
            destination_city: "London".to_string(),
            destination_code: "LHR".to_string(),
            departure_date: "2026-11-05".to_string(),
            duration_seconds: Some(27_900),
            duration_text: None,
            price: 389.0,
            currency: "USD".to_string(),
            deep_link: "https://www.kiwi.com/deep".to_string(),
            route: route
                .iter()
                .map(|(from, to)| RouteLeg { city_from: from.to_string(), city_to: to.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(27_900), "7h 45m");
        assert_eq!(format_duration(59), "0h 0m");
        assert_eq!(format_duration(90_000), "25h 0m");
    }

    #[test]
    fn test_direct_card() {
        let card = flight_card(Language::En, &flight(&[("Dubai", "London")]));
        assert!(card.starts_with("✈️ *Direct Flight Found!*"));
        assert!(card.contains("🛫 From: Dubai (DXB) → 🛬 To: London (LHR)\n📅 Date: 2026-11-05"));
        assert!(card.contains("⏳ Duration: 7h 45m"));
        assert!(card.contains("💰 Price: 389 USD"));
        assert!(card.ends_with("[🔗 Book Now](https://www.kiwi.com/deep)"));
        assert!(!card.contains("Transfers"));
    }

    #[test]
    fn test_transfer_card_arabic() {
        let card = flight_card(Language::Ar, &flight(&[("Dubai", "Doha"), ("Doha", "London")]));
        assert!(card.starts_with("✈️ *رحلة مع ترانزيت*"));
        assert!(card.contains("عدد الترانزيت: 1"));
        assert!(card.contains("مدن الترانزيت: Doha"));
    }

    #[test]
    fn test_card_without_route_reads_direct() {
        let card = flight_card(Language::En, &flight(&[]));
        assert!(card.starts_with("✈️ *Direct Flight Found!*"));
        assert!(!card.contains("Transfers"));
    }

    #[test]
    fn test_duration_text_fallback() {
        let mut offer = flight(&[("Dubai", "London")]);
        offer.duration_seconds = None;
        offer.duration_text = Some("7h 45m".to_string());
        assert!(flight_card(Language::En, &offer).contains("⏳ Duration: 7h 45m"));
    }

    #[test]
    fn test_searching_shows_correction() {
        let mut query = ParsedQuery {
            from: "DXB".to_string(),
            to: "LHR".to_string(),
            date: "05/11/2026".to_string(),
            original_date: "5/11/2026".to_string(),
            travel_date: chrono_date(),
        };
        assert_eq!(
            searching(Language::En, &query),
            "🔍 Searching flights from DXB to LHR on 5/11/2026 (05/11/2026)..."
        );

        query.original_date = query.date.clone();
        assert_eq!(searching(Language::En, &query), "🔍 Searching flights from DXB to LHR on 05/11/2026...");
    }

    fn chrono_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2026, 11, 5).unwrap()
    }

    #[test]
    fn test_language_keyboard_labels() {
        let en = language_keyboard(Language::En);
        assert_eq!(en[0][0], Button::new("English 🇺🇸", ACTION_LANG_EN));
        let ar = language_keyboard(Language::Ar);
        assert_eq!(ar[0][0].label, "الإنجليزية 🇺🇸");
        assert_eq!(ar[1][0].action, ACTION_LANG_AR);
    }
}
