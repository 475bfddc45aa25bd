/// One reward category card on the home screen.
#[derive(Clone, PartialEq)]
pub struct CaseItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: char,
    pub gradient: &'static str,
    pub price_badge: Option<u32>,
}

pub fn case_items() -> Vec<CaseItem> {
    vec![
        CaseItem {
            id: "free",
            title: "Free",
            description: "2 cases",
            icon: '🎁',
            gradient: "from-pink-500 via-purple-500 to-blue-500",
            price_badge: None,
        },
        CaseItem {
            id: "roulette",
            title: "Roulette",
            description: "10 cases",
            icon: '⭐',
            gradient: "from-blue-500 via-blue-600 to-blue-700",
            price_badge: Some(1500),
        },
        CaseItem {
            id: "slots",
            title: "Slots",
            description: "5 cases",
            icon: '🎰',
            gradient: "from-red-600 via-red-700 to-red-800",
            price_badge: None,
        },
        CaseItem {
            id: "eggs",
            title: "Eggs",
            description: "5 cases",
            icon: '🥚',
            gradient: "from-green-600 via-green-700 to-green-800",
            price_badge: None,
        },
        CaseItem {
            id: "upgrade",
            title: "Upgrade",
            description: "Upgrade your gifts",
            icon: '🦆',
            gradient: "from-purple-600 via-purple-700 to-purple-800",
            price_badge: None,
        },
    ]
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Cases,
    Contests,
    Tasks,
    Leaders,
    Profile,
}

impl NavTab {
    pub const ALL: [NavTab; 5] = [
        NavTab::Cases,
        NavTab::Contests,
        NavTab::Tasks,
        NavTab::Leaders,
        NavTab::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Cases => "Cases",
            NavTab::Contests => "Contests",
            NavTab::Tasks => "Tasks",
            NavTab::Leaders => "Leaders",
            NavTab::Profile => "Profile",
        }
    }

    pub fn badge(&self) -> Option<u32> {
        match self {
            NavTab::Contests => Some(3),
            NavTab::Tasks => Some(6),
            _ => None,
        }
    }
}
