use crate::model::UserRecord;

/// Case-insensitive substring match of `term` against the user's name.
///
/// `term` must already be lowercased.
fn name_matches(user: &UserRecord, term: &str) -> bool {
    user.name.to_lowercase().contains(term)
}

/// Users whose name contains `term`, ignoring case, in their original order.
///
/// An empty term returns the whole list.
pub fn filter_users(users: &[UserRecord], term: &str) -> Vec<UserRecord> {
    if term.is_empty() {
        return users.to_vec();
    }
    let q = term.to_lowercase();
    users
        .iter()
        .filter(|u| name_matches(u, &q))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            UserRecord::new(1, "Leanne Graham", "Sincere@april.biz"),
            UserRecord::new(2, "Ervin Howell", "Shanna@melissa.tv"),
            UserRecord::new(3, "Clementine Bauch", "Nathan@yesenia.net"),
            UserRecord::new(4, "Patricia Lebsack", "Julianne.OConner@kory.org"),
        ]
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let users = sample();
        assert_eq!(filter_users(&users, ""), users);
    }

    #[test]
    fn matches_ignoring_case() {
        let users = sample();
        assert_eq!(names(&filter_users(&users, "ervin")), ["Ervin Howell"]);
        assert_eq!(names(&filter_users(&users, "ERVIN")), ["Ervin Howell"]);
        assert_eq!(names(&filter_users(&users, "hOwElL")), ["Ervin Howell"]);
    }

    #[test]
    fn only_name_is_searched() {
        let users = sample();
        assert!(filter_users(&users, "april").is_empty());
    }

    #[test]
    fn keeps_original_relative_order() {
        let users = sample();
        assert_eq!(
            names(&filter_users(&users, "a")),
            ["Leanne Graham", "Clementine Bauch", "Patricia Lebsack"]
        );
        assert_eq!(
            names(&filter_users(&users, "e")),
            ["Leanne Graham", "Ervin Howell", "Clementine Bauch", "Patricia Lebsack"]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_users(&sample(), "zzz").is_empty());
    }

    #[test]
    fn special_characters_do_not_panic() {
        let users = sample();
        for q in ["(", "[a-z]*", ".*", "\\", "%", "  ", "ñ"] {
            let _ = filter_users(&users, q);
        }
        assert_eq!(names(&filter_users(&users, " h")), ["Ervin Howell"]);
    }

    #[test]
    fn unicode_case_folding() {
        let users = vec![
            UserRecord::new(1, "Ángel Núñez", "angel@example.com"),
            UserRecord::new(2, "Zoë Adams", "zoe@example.com"),
        ];
        assert_eq!(names(&filter_users(&users, "ÁNGEL")), ["Ángel Núñez"]);
        assert_eq!(names(&filter_users(&users, "ZOË")), ["Zoë Adams"]);
    }
}
