use std::fmt;

use serde::{Deserialize, Serialize};

/// Courses the menu browser can switch between, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuCategory {
    #[default]
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Starters,
        MenuCategory::Mains,
        MenuCategory::Desserts,
        MenuCategory::Drinks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::Mains => "Mains",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub category: MenuCategory,
    pub name: String,
    pub desc: String,
    /// Display price, already formatted ("$12")
    pub price: String,
    pub img: String,
    #[serde(default, rename = "blurDataURL", skip_serializing_if = "Option::is_none")]
    pub blur_data_url: Option<String>,
}

impl MenuItem {
    /// Accessible label used on the card ("Name — desc — $price")
    pub fn aria_label(&self) -> String {
        format!("{} — {} — {}", self.name, self.desc, self.price)
    }
}

/// Layout of the menu browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuVariant {
    #[default]
    Cards,
    Compact,
}

/// Items in `category`, in their original order
pub fn filter_by_category(items: &[MenuItem], category: MenuCategory) -> Vec<&MenuItem> {
    items.iter().filter(|item| item.category == category).collect()
}
