use super::*;

#[test]
fn login_is_the_root_path() {
    assert_eq!(AppRoute::Login.path(), "/");
    assert_eq!(AppRoute::Login.segment(), "");
}

#[test]
fn dashboard_path_and_segment() {
    assert_eq!(AppRoute::Dashboard.path(), "/dashboard");
    assert_eq!(AppRoute::Dashboard.segment(), "dashboard");
}

#[test]
fn segments_are_paths_without_leading_slash() {
    for route in [AppRoute::Login, AppRoute::Dashboard] {
        assert_eq!(format!("/{}", route.segment()), route.path());
    }
}
