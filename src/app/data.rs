//! Hard-coded demo data for the showcase pages.

use chrono::NaiveDate;
use lumen::components::BadgeVariant;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "Admin" => Some(Role::Admin),
            "Editor" => Some(Role::Editor),
            "Viewer" => Some(Role::Viewer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }

    #[must_use]
    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            UserStatus::Active => BadgeVariant::Success,
            UserStatus::Inactive => BadgeVariant::Neutral,
            UserStatus::Pending => BadgeVariant::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub joined: NaiveDate,
}

impl User {
    fn new(id: u32, name: &str, email: &str, role: Role, status: UserStatus, joined: (i32, u32, u32)) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            // Fixture dates are valid by construction
            joined: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap_or_default(),
        }
    }
}

/// The ten demo users
#[must_use]
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com", Role::Admin, UserStatus::Active, (2024, 1, 15)),
        User::new(2, "Alice Smith", "alice@example.com", Role::Editor, UserStatus::Active, (2024, 2, 20)),
        User::new(3, "Bob Johnson", "bob@example.com", Role::Viewer, UserStatus::Inactive, (2024, 3, 10)),
        User::new(4, "Mary Kim", "mary@example.com", Role::Editor, UserStatus::Active, (2024, 4, 5)),
        User::new(5, "Tom Wilson", "tom@example.com", Role::Viewer, UserStatus::Pending, (2024, 5, 12)),
        User::new(6, "Sara Davis", "sara@example.com", Role::Admin, UserStatus::Active, (2024, 6, 8)),
        User::new(7, "Mike Brown", "mike@example.com", Role::Editor, UserStatus::Inactive, (2024, 7, 22)),
        User::new(8, "Lisa Taylor", "lisa@example.com", Role::Viewer, UserStatus::Active, (2024, 8, 14)),
        User::new(9, "Chris Lee", "chris@example.com", Role::Editor, UserStatus::Active, (2024, 9, 3)),
        User::new(10, "Emma White", "emma@example.com", Role::Admin, UserStatus::Pending, (2024, 10, 18)),
    ]
}

#[derive(Debug, Clone)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub positive: bool,
}

#[must_use]
pub fn demo_stats() -> Vec<Stat> {
    let stat = |label: &str, value: &str, change: &str, positive| Stat {
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        positive,
    };

    vec![
        stat("Total Users", "2,847", "12% from last month", true),
        stat("Active Sessions", "1,234", "8% from last week", true),
        stat("Revenue", "$48,290", "23% from last month", true),
        stat("Bounce Rate", "24.8%", "3% from last month", false),
    ]
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub name: String,
    pub title: String,
    pub time: String,
    pub color: Color,
}

#[must_use]
pub fn demo_activities() -> Vec<Activity> {
    let activity = |name: &str, title: &str, time: &str, color| Activity {
        name: name.to_string(),
        title: title.to_string(),
        time: time.to_string(),
        color,
    };

    vec![
        activity("John Doe", "John Doe updated their profile", "2 minutes ago", Color::Rgb(99, 102, 241)),
        activity(
            "Alice Smith",
            "Alice Smith created a new project",
            "15 minutes ago",
            Color::Rgb(16, 185, 129),
        ),
        activity("Bob Johnson", "Bob Johnson uploaded 3 files", "1 hour ago", Color::Rgb(245, 158, 11)),
        activity(
            "Mary Kim",
            "Mary Kim invited 2 team members",
            "3 hours ago",
            Color::Rgb(239, 68, 68),
        ),
    ]
}

/// Weekly revenue series feeding the dashboard sparkline
#[must_use]
pub fn revenue_series() -> Vec<f64> {
    vec![
        32.0, 38.0, 35.0, 41.0, 44.0, 40.0, 47.0, 52.0, 49.0, 55.0, 58.0, 54.0, 61.0, 66.0,
    ]
}
