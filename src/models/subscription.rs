use super::{Address, AdminState, Category};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub channels: Vec<Address>,
    pub receiver: String,
    pub categories: Vec<Category>,
    pub labels: Vec<String>,
    pub description: String,
    pub resend_limit: i32,
    pub resend_interval: String,
    pub admin_state: AdminState,
    pub created: i64,
    pub modified: i64,
}

impl Subscription {
    /// Whether a notification with this category and these labels is of
    /// interest to the subscription.
    pub fn matches(&self, category: Option<Category>, labels: &[String]) -> bool {
        category.is_some_and(|c| self.categories.contains(&c))
            || labels.iter().any(|l| self.labels.contains(l))
    }
}
