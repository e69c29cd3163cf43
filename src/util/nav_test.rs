#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn root_path_is_the_entry_route() {
    assert_eq!(ROOT_PATH, "/");
}

#[test]
fn redirect_is_noop_but_callable() {
    redirect(ROOT_PATH);
    redirect("/signup");
}
