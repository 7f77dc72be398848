use super::*;

fn make_user(first: &str) -> UserInfo {
    UserInfo { authenticated: true, first_name: first.to_owned(), ..UserInfo::default() }
}

#[test]
fn new_session_has_no_user() {
    let session = SessionContext::new();
    assert!(session.current_user().is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn set_current_user_is_visible_to_clones() {
    let session = SessionContext::new();
    let reader = session.clone();
    session.set_current_user(make_user("Ana"));
    assert_eq!(reader.current_user(), Some(make_user("Ana")));
    assert!(reader.is_signed_in());
}

#[test]
fn later_write_replaces_whole_user() {
    let session = SessionContext::new();
    session.set_current_user(UserInfo { last_name: Some("Silva".to_owned()), ..make_user("Ana") });
    session.set_current_user(make_user("Bo"));
    let user = session.current_user().unwrap();
    assert_eq!(user.first_name, "Bo");
    assert!(user.last_name.is_none());
}
