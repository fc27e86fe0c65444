//! Built-in seed data used on first run and on reset.

/// Items of the single travel checklist, in display order
pub const DEFAULT_ITEMS: &[&str] = &[
    "Passport",
    "Toothbrush",
    "Phone charger",
    "Clothes",
    "Sunglasses",
    "Travel adapter",
    "Snacks",
];

pub struct ListTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: &'static [&'static str],
}

/// Icon and color given to lists created by the user
pub const NEW_LIST_ICON: &str = "fas fa-list";
pub const NEW_LIST_COLOR: &str = "#007bff";

pub const DEFAULT_LISTS: &[ListTemplate] = &[
    ListTemplate {
        id: "shopping",
        name: "Shopping list",
        icon: "fas fa-shopping-cart",
        color: "#28a745",
        items: &["Milk", "Cereals", "Eggs", "Apples"],
    },
    ListTemplate {
        id: "self-growth",
        name: "Self-growth",
        icon: "fas fa-seedling",
        color: "#6f42c1",
        items: &["Meditate", "Journal", "Learn a new skill"],
    },
    ListTemplate {
        id: "travel-bucket",
        name: "Travel bucket list",
        icon: "fas fa-plane",
        color: "#17a2b8",
        items: &["Visit Japan", "See the Northern Lights", "Road trip"],
    },
    ListTemplate {
        id: "work",
        name: "Work and assignments",
        icon: "fas fa-briefcase",
        color: "#fd7e14",
        items: &["Reply to emails", "Prepare presentation", "Team meeting"],
    },
    ListTemplate {
        id: "fitness",
        name: "Fitness",
        icon: "fas fa-dumbbell",
        color: "#dc3545",
        items: &["Morning run", "Yoga", "Drink water"],
    },
];
