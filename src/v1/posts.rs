/*
 * Copyright (c) 2025 Amplifr Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{EnumString, IntoStaticStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "DESC")]
    Desc,
    #[strum(serialize = "ASC")]
    Asc,
}

/// Parameters for listing one page of scheduled posts.
///
/// The defaults ask for the first post scheduled for today, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledPostsQuery {
    pub page: u32,
    pub per_page: u32,
    pub today: bool,
    pub order: SortOrder,
}

impl Default for ScheduledPostsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 1,
            today: true,
            order: SortOrder::Desc,
        }
    }
}

impl ScheduledPostsQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn today(mut self, today: bool) -> Self {
        self.today = today;
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    // Query pairs in the order the API documents them
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let order: &'static str = self.order.into();
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
            ("today", self.today.to_string()),
            ("order", order.to_string()),
        ]
    }
}
