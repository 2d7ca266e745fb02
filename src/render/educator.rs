// SPDX-License-Identifier: MIT

//! Educator settings form markup.

use crate::models::Educator;
use crate::render::escape_html;

/// Editable settings form, pre-populated from the stored profile.
///
/// Missing fields render as empty inputs. Submission and the
/// cancel/back navigation are wired up by the frontend.
pub fn render_settings_form(educator: &Educator) -> String {
    format!(
        "<form id=\"educator-settings\" class=\"settings-form\">\
         <label>Name<input name=\"name\" type=\"text\" value=\"{}\" required></label>\
         <label>Email<input name=\"email\" type=\"email\" value=\"{}\" required></label>\
         <label>Bio<textarea name=\"bio\">{}</textarea></label>\
         <div class=\"form-actions\">\
         <button type=\"submit\" class=\"save-button\">Save</button>\
         <button type=\"button\" class=\"cancel-button\">Cancel</button>\
         </div>\
         </form>",
        escape_html(&educator.name),
        escape_html(&educator.email),
        escape_html(&educator.bio)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_prepopulated() {
        let educator = Educator {
            name: "Ms. Rivera".to_string(),
            email: "rivera@school.example".to_string(),
            bio: "Science & math".to_string(),
            updated_at: String::new(),
        };
        let markup = render_settings_form(&educator);
        assert!(markup.contains("value=\"Ms. Rivera\""));
        assert!(markup.contains("value=\"rivera@school.example\""));
        assert!(markup.contains("Science &amp; math"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let educator = Educator {
            name: String::new(),
            email: String::new(),
            bio: String::new(),
            updated_at: String::new(),
        };
        let markup = render_settings_form(&educator);
        assert!(markup.contains("name=\"name\" type=\"text\" value=\"\""));
        assert!(markup.contains("<textarea name=\"bio\"></textarea>"));
    }
}
