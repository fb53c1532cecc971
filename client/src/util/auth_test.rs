#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn location_helpers_are_noops_but_callable() {
    replace_location("/login");
    assign_location("/");
}
