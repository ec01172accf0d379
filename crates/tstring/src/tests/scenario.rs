//! End-to-end walk through the whole public surface of `TString`, mutating
//! one string the way an interactive caller would.

use crate::TString;

#[test]
fn build_mutate_inspect() {
    let mut s = TString::from("Hello");
    assert_eq!(s, "Hello");

    s.append(", World!");
    assert_eq!(s, "Hello, World!");
    assert_eq!(s.len(), 13);

    s.clear();
    assert!(s.is_empty());

    s.append("New String");
    assert_eq!(s, "New String");

    assert_eq!(s.substr(0, 3).unwrap(), "New");
    assert_eq!(s.find("String"), Some(4));

    let other = TString::from("Hello");
    s += &other;
    assert_eq!(s, "New StringHello");

    let combined = &s + " World Again!";
    assert_eq!(combined, "New StringHello World Again!");
    assert_eq!(s, "New StringHello");

    let doubled = &s + &other;
    assert_eq!(doubled, "New StringHelloHello");

    assert_eq!(s.substr_from(4).unwrap(), "StringHello");

    let parts = combined.split(b' ');
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[0], "New");
    assert_eq!(parts[1], "StringHello");
    assert_eq!(parts[2], "World");
    assert_eq!(parts[3], "Again!");

    assert!(combined.capacity().is_power_of_two());
    assert_eq!(combined.capacity(), (combined.len() + 1).next_power_of_two());
}
