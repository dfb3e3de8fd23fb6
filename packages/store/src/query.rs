//! # Search and sort over the canonical list
//!
//! A [`ListQuery`] holds the search text and the sort order as two independent
//! criteria. [`ListQuery::apply`] always starts from the full list it is given,
//! filters it, then sorts the survivors, so changing one criterion never
//! discards the other.

use std::cmp::Ordering;
use std::fmt;

use crate::models::User;

/// Columns the table can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortColumn {
    #[default]
    Name,
    Email,
    Linkedin,
    Gender,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Email,
        SortColumn::Linkedin,
        SortColumn::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Email => "Email",
            SortColumn::Linkedin => "LinkedIn URL",
            SortColumn::Gender => "Gender",
        }
    }

    fn key<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SortColumn::Name => &user.name,
            SortColumn::Email => &user.email,
            SortColumn::Linkedin => &user.linkedin,
            SortColumn::Gender => user.gender.as_str(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Case-insensitive ordering; on a case-only tie lowercase comes first.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Whether `user` matches the already-lowercased `needle` on name, email,
/// LinkedIn URL or gender.
pub fn matches(user: &User, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        user.name.as_str(),
        user.email.as_str(),
        user.linkedin.as_str(),
        user.gender.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filter and sort criteria applied together over the canonical list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    search: String,
    sort: Option<(SortColumn, SortDirection)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text. Matching is case-insensitive.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_lowercase();
    }

    pub fn set_sort(&mut self, column: SortColumn, direction: SortDirection) {
        self.sort = Some((column, direction));
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort
    }

    /// Filter `users` by the search text, then order them by the sort
    /// criterion. Without a sort the insertion order is kept.
    pub fn apply(&self, users: &[User]) -> Vec<User> {
        let mut out: Vec<User> = users
            .iter()
            .filter(|u| matches(u, &self.search))
            .cloned()
            .collect();

        if let Some((column, direction)) = self.sort {
            out.sort_by(|a, b| {
                let ord = compare_text(column.key(a), column.key(b));
                match direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn user(name: &str, email: &str, gender: Gender) -> User {
        User {
            id: name.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            linkedin: format!("https://linkedin.com/in/{}", name.to_lowercase()),
            gender,
            ..User::default()
        }
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let users = vec![
            user("Bob", "b@x.io", Gender::Male),
            user("alice", "a@x.io", Gender::Female),
        ];
        let mut query = ListQuery::new();

        query.set_sort(SortColumn::Name, SortDirection::Asc);
        assert_eq!(names(&query.apply(&users)), vec!["alice", "Bob"]);

        query.set_sort(SortColumn::Name, SortDirection::Desc);
        assert_eq!(names(&query.apply(&users)), vec!["Bob", "alice"]);
    }

    #[test]
    fn test_case_only_tie_puts_lowercase_first() {
        assert_eq!(compare_text("a", "A"), Ordering::Less);
        assert_eq!(compare_text("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_gender_and_email() {
        let users = vec![
            user("Cy", "c@x.io", Gender::Other),
            user("Al", "z@x.io", Gender::Female),
            user("Bo", "m@x.io", Gender::Male),
        ];
        let mut query = ListQuery::new();

        query.set_sort(SortColumn::Gender, SortDirection::Asc);
        assert_eq!(names(&query.apply(&users)), vec!["Al", "Bo", "Cy"]);

        query.set_sort(SortColumn::Email, SortDirection::Desc);
        assert_eq!(names(&query.apply(&users)), vec!["Al", "Bo", "Cy"]);

        query.set_sort(SortColumn::Email, SortDirection::Asc);
        assert_eq!(names(&query.apply(&users)), vec!["Cy", "Bo", "Al"]);
    }

    #[test]
    fn test_search_matches_any_listed_field() {
        let users = vec![
            user("Ann", "a@gmail.com", Gender::Female),
            user("Ben", "b@yahoo.com", Gender::Male),
        ];
        let mut query = ListQuery::new();

        query.set_search("gmail");
        assert_eq!(names(&query.apply(&users)), vec!["Ann"]);

        query.set_search("BEN");
        assert_eq!(names(&query.apply(&users)), vec!["Ben"]);

        // "male" is a substring of "Female" too
        query.set_search("male");
        assert_eq!(names(&query.apply(&users)), vec!["Ann", "Ben"]);

        query.set_search("linkedin.com/in/ann");
        assert_eq!(names(&query.apply(&users)), vec!["Ann"]);

        query.set_search("");
        assert_eq!(query.apply(&users).len(), 2);
    }

    #[test]
    fn test_search_and_sort_compose() {
        let users = vec![
            user("Zed", "z@gmail.com", Gender::Male),
            user("Amy", "a@yahoo.com", Gender::Female),
            user("Kim", "k@gmail.com", Gender::Other),
        ];
        let mut query = ListQuery::new();
        query.set_sort(SortColumn::Name, SortDirection::Asc);
        query.set_search("gmail");
        assert_eq!(names(&query.apply(&users)), vec!["Kim", "Zed"]);

        // Re-sorting keeps the active search
        query.set_sort(SortColumn::Name, SortDirection::Desc);
        assert_eq!(names(&query.apply(&users)), vec!["Zed", "Kim"]);
    }

    #[test]
    fn test_no_sort_keeps_insertion_order() {
        let users = vec![
            user("Zed", "z@x.io", Gender::Male),
            user("Amy", "a@x.io", Gender::Female),
        ];
        assert_eq!(names(&ListQuery::new().apply(&users)), vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.to_string(), "desc");
    }
}
