//! Element factory helpers shared by the builders.

use crate::dom::Element;
use crate::types::User;

/// Create an element with text content and an optional class.
///
/// Pure construction: the returned node is not attached anywhere.
pub fn create_elem_with_text(tag: &str, text: &str, class_name: Option<&str>) -> Element {
    let elem = Element::new(tag);
    elem.set_text(text);
    if let Some(class) = class_name {
        elem.add_class(class);
    }
    elem
}

/// Build one `<option>` per user (value = id, label = name), in input order.
/// Absent users yields `None`.
pub fn create_select_options(users: Option<&[User]>) -> Option<Vec<Element>> {
    let users = users?;
    let options = users
        .iter()
        .map(|user| {
            let option = Element::new("option");
            option.set_attr("value", &user.id.to_string());
            option.set_text(&user.name);
            option
        })
        .collect();
    Some(options)
}
