//! Icon Resolver
//!
//! Picks a display emoji for an item from its text. The text is trimmed and
//! lowercased, then [`ICON_RULES`] is scanned top to bottom; the first rule
//! with a keyword contained in the text wins. Order is priority: a keyword
//! that contains another keyword ("phone charger", "headphones" vs "phone")
//! must sit above it. Unmatched, empty or blank text gets [`FALLBACK_ICON`].

use crate::domain::ChecklistItem;

/// Generic luggage icon for anything the table doesn't know
pub const FALLBACK_ICON: &str = "🧳";

#[derive(Debug, Clone, Copy)]
pub struct IconRule {
    /// Lowercase substrings, any of which selects `icon`
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
}

impl IconRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

const fn rule(keywords: &'static [&'static str], icon: &'static str) -> IconRule {
    IconRule { keywords, icon }
}

/// Priority-ordered keyword table
pub const ICON_RULES: &[IconRule] = &[
    // Documents & money
    rule(&["passport"], "📘"),
    rule(&["boarding pass", "ticket", "flight"], "🎫"),
    rule(&["visa", "permit", "documents", "papers"], "📄"),
    rule(&["driver's license", "license", "id card", "identification"], "🪪"),
    rule(&["insurance", "policy", "prescription"], "📋"),
    rule(&["itinerary", "schedule", "reservation", "booking", "meeting", "appointment"], "📅"),
    rule(&["guidebook", "map"], "🗺️"),
    rule(&["wallet", "purse"], "👛"),
    rule(&["money", "cash", "currency"], "💰"),
    rule(&["playing cards", "deck of cards"], "🃏"),
    rule(&["credit card", "debit card", "card"], "💳"),
    // Electronics
    rule(&["headphones", "earphones", "earbuds"], "🎧"),
    rule(&["bluetooth speaker", "speaker"], "🔊"),
    rule(&["power bank", "powerbank", "battery pack", "portable charger", "batteries", "battery"], "🔋"),
    rule(&["phone charger", "charger", "charging", "charge", "cable", "adapter", "plug"], "🔌"),
    rule(&["smartphone", "phone", "mobile"], "📱"),
    rule(&["tablet", "ipad"], "📱"),
    rule(&["laptop", "computer", "macbook"], "💻"),
    rule(&["camera", "gopro", "photography"], "📷"),
    rule(&["smartwatch", "watch"], "⌚"),
    // Personal care
    rule(&["toothbrush", "toothpaste", "tooth"], "🪥"),
    rule(&["floss", "mouthwash"], "🦷"),
    rule(&["hairbrush", "comb", "brush"], "🪮"),
    rule(&["shampoo", "conditioner"], "🧴"),
    rule(&["soap", "body wash"], "🧼"),
    rule(
        &["deodorant", "antiperspirant", "sunscreen", "sunblock", "spf", "lotion", "moisturizer", "cream", "sanitizer"],
        "🧴",
    ),
    rule(&["razor", "shaver"], "🪒"),
    rule(&["perfume", "cologne", "fragrance"], "💐"),
    rule(&["makeup", "cosmetics", "lipstick", "mascara"], "💄"),
    rule(&["contact lens", "contacts"], "👁️"),
    rule(&["sunglasses"], "🕶️"),
    rule(&["eyeglasses", "glasses"], "👓"),
    rule(&["towel"], "🏖️"),
    // Health
    rule(&["face mask", "mask"], "😷"),
    rule(&["first aid", "bandaid", "band-aid", "bandage", "plaster"], "🩹"),
    rule(&["medicine", "medication", "pills", "painkiller", "vitamins", "supplements"], "💊"),
    rule(&["thermometer"], "🌡️"),
    // Clothing
    rule(&["pajamas", "sleepwear", "nightwear"], "👘"),
    rule(&["swimsuit", "swimwear", "bikini", "swimming"], "👙"),
    rule(&["underwear", "undergarments"], "🩲"),
    rule(&["socks", "stockings"], "🧦"),
    rule(&["flip flops", "flipflops", "sandals", "slippers"], "🩴"),
    rule(&["shoes", "sneakers", "trainers"], "👟"),
    rule(&["boots"], "🥾"),
    rule(&["raincoat", "jacket", "coat", "hoodie", "sweater", "fleece"], "🧥"),
    rule(&["shorts"], "🩳"),
    rule(&["pants", "trousers", "jeans", "leggings"], "👖"),
    rule(&["dress", "skirt"], "👗"),
    rule(&["clothes", "clothing", "outfit", "shirt", "blouse"], "👕"),
    rule(&["belt", "necktie"], "👔"),
    rule(&["beanie", "cap", "hat"], "🧢"),
    rule(&["necklace", "earrings", "bracelet", "jewelry", "jewellery", "ring"], "💍"),
    // Food & drink
    rule(&["water bottle", "bottle"], "🍼"),
    rule(&["water"], "💧"),
    rule(&["snack", "treats", "popcorn"], "🍿"),
    rule(&["coffee", "tea bags"], "☕"),
    rule(&["chewing gum", "gum", "candy", "sweets"], "🍬"),
    rule(&["chocolate"], "🍫"),
    rule(&["milk"], "🥛"),
    rule(&["cereal", "oats", "granola"], "🥣"),
    rule(&["egg"], "🥚"),
    rule(&["bread", "toast"], "🍞"),
    rule(&["apple", "fruit", "banana"], "🍎"),
    rule(&["vegetable", "salad", "broccoli"], "🥦"),
    rule(&["groceries", "grocery"], "🛒"),
    rule(&["food", "lunch", "dinner", "meal"], "🍽️"),
    // Travel gear
    rule(&["luggage tag", "name tag"], "🏷️"),
    rule(&["suitcase", "luggage", "carry-on", "carry on", "duffel"], "🧳"),
    rule(&["backpack", "rucksack", "daypack"], "🎒"),
    rule(&["travel pillow", "pillow", "blanket", "sleeping bag"], "🛏️"),
    rule(&["plastic bag", "shopping bag", "tote"], "🛍️"),
    rule(&["handbag", "bag"], "👜"),
    rule(&["umbrella"], "☂️"),
    rule(&["padlock", "lock"], "🔒"),
    // Reading & entertainment
    rule(&["notebook", "journal", "diary"], "📓"),
    rule(&["magazine", "newspaper"], "📰"),
    rule(&["kindle", "novel", "reading", "book"], "📚"),
    rule(&["headlamp", "flashlight", "torch"], "🔦"),
    rule(&["music", "playlist"], "🎵"),
    rule(&["puzzle"], "🧩"),
    rule(&["video game", "game"], "🎮"),
    // Work, growth & fitness
    rule(&["presentation", "slides", "report"], "📊"),
    rule(&["email", "inbox"], "📧"),
    rule(&["assignment", "homework", "deadline"], "📝"),
    rule(&["learn", "course", "study", "lesson"], "🎓"),
    rule(&["meditat", "yoga"], "🧘"),
    rule(&["running", "morning run", "jogging"], "🏃"),
    rule(&["workout", "gym", "exercise", "push-ups", "squats", "dumbbell", "weights"], "🏋️"),
    rule(&["stretch"], "🤸"),
    rule(&["northern lights", "aurora"], "🌌"),
    rule(&["trip", "vacation", "holiday", "visit"], "✈️"),
    // Miscellaneous
    rule(&["keys", "keychain"], "🔑"),
    rule(&["tissues", "kleenex", "toilet paper", "wipes"], "🧻"),
    rule(&["laundry", "detergent"], "🧺"),
    rule(&["gift", "souvenir", "present"], "🎁"),
    rule(&["pencil", "pens", "pen"], "✏️"),
];

/// Emoji for an item's text
pub fn icon_for_item(text: &str) -> &'static str {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return FALLBACK_ICON;
    }
    ICON_RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map_or(FALLBACK_ICON, |rule| rule.icon)
}

/// Re-resolve every item's icon from its text; other fields are untouched.
pub fn assign_icons(items: Vec<ChecklistItem>) -> Vec<ChecklistItem> {
    items
        .into_iter()
        .map(|mut item| {
            item.icon = Some(icon_for_item(&item.text).to_string());
            item
        })
        .collect()
}

/// Backfill a missing icon. Returns `true` if the item was changed.
pub fn ensure_icon(item: &mut ChecklistItem) -> bool {
    if item.icon.as_deref().is_some_and(|icon| !icon.is_empty()) {
        return false;
    }
    item.icon = Some(icon_for_item(&item.text).to_string());
    true
}
