//! services/tui/src/ui/forms.rs
//!
//! Buffer structs for the modal forms: sign-in/register, add/edit tool, and
//! the tag-filter browser. Forms hold raw text until submission; required
//! fields and the password confirmation are checked here (presentation
//! validation), well-formedness is the verifier's concern.

use tooldex_core::domain::{Category, Pricing, Tool, ToolDraft, ToolId};
use tooldex_core::ports::Credentials;

//=========================================================================================
// Sign-in / Register
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

/// Buffer behind the auth modal. Two tabs share the email/password fields.
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub focus: usize,
    pub error: Option<String>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            tab: AuthTab::Login,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
            focus: 0,
            error: None,
        }
    }
}

impl AuthForm {
    pub fn field_count(&self) -> usize {
        match self.tab {
            AuthTab::Login => 2,
            AuthTab::Register => 4,
        }
    }

    /// Field labels in focus order for the active tab.
    pub fn labels(&self) -> &'static [&'static str] {
        match self.tab {
            AuthTab::Login => &["Email", "Password"],
            AuthTab::Register => &["Full Name", "Email", "Password", "Confirm Password"],
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut String {
        match (self.tab, index) {
            (AuthTab::Login, 0) => &mut self.email,
            (AuthTab::Login, _) => &mut self.password,
            (AuthTab::Register, 0) => &mut self.name,
            (AuthTab::Register, 1) => &mut self.email,
            (AuthTab::Register, 2) => &mut self.password,
            (AuthTab::Register, _) => &mut self.confirm,
        }
    }

    pub fn field(&self, index: usize) -> &str {
        match (self.tab, index) {
            (AuthTab::Login, 0) => &self.email,
            (AuthTab::Login, _) => &self.password,
            (AuthTab::Register, 0) => &self.name,
            (AuthTab::Register, 1) => &self.email,
            (AuthTab::Register, 2) => &self.password,
            (AuthTab::Register, _) => &self.confirm,
        }
    }

    /// Passwords and the confirmation are displayed masked.
    pub fn is_masked(&self, index: usize) -> bool {
        match self.tab {
            AuthTab::Login => index == 1,
            AuthTab::Register => index >= 2,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.field_count() - 1) % self.field_count();
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::Login => AuthTab::Register,
            AuthTab::Register => AuthTab::Login,
        };
        self.focus = 0;
        self.error = None;
    }

    /// Builds the credentials for submission, or the inline message that
    /// blocks it. The password-confirmation mismatch is caught here.
    pub fn credentials(&self) -> Result<Credentials, String> {
        match self.tab {
            AuthTab::Login => {
                if self.email.trim().is_empty() || self.password.is_empty() {
                    return Err("Email and password are required".to_string());
                }
                Ok(Credentials {
                    name: None,
                    email: self.email.clone(),
                    password: self.password.clone(),
                })
            }
            AuthTab::Register => {
                if self.name.trim().is_empty()
                    || self.email.trim().is_empty()
                    || self.password.is_empty()
                {
                    return Err("All fields are required".to_string());
                }
                if self.password != self.confirm {
                    return Err("Passwords don't match".to_string());
                }
                Ok(Credentials {
                    name: Some(self.name.clone()),
                    email: self.email.clone(),
                    password: self.password.clone(),
                })
            }
        }
    }
}

//=========================================================================================
// Add / Edit Tool
//=========================================================================================

/// Buffer behind the add/edit modal. `target` is `None` for the add form.
#[derive(Debug, Clone)]
pub struct ToolForm {
    pub target: Option<ToolId>,
    pub name: String,
    pub website: String,
    pub image_url: String,
    pub category: Category,
    pub pricing: Pricing,
    pub rating: String,
    pub tags: String,
    pub description: String,
    pub focus: usize,
    pub error: Option<String>,
}

/// Focus order of the form fields.
pub const TOOL_FIELDS: [&str; 8] = [
    "Name",
    "Website URL",
    "Image URL (optional)",
    "Category",
    "Pricing",
    "Rating (1-5)",
    "Tags (comma-separated)",
    "Description",
];

pub const TOOL_FIELD_CATEGORY: usize = 3;
pub const TOOL_FIELD_PRICING: usize = 4;

impl ToolForm {
    pub fn new_add() -> Self {
        let draft = ToolDraft::default();
        Self {
            target: None,
            name: draft.name,
            website: draft.website,
            image_url: String::new(),
            category: draft.category,
            pricing: draft.pricing,
            rating: format!("{:.1}", draft.rating),
            tags: draft.tags,
            description: draft.description,
            focus: 0,
            error: None,
        }
    }

    /// Pre-filled from the record under edit, tags re-joined with ", ".
    pub fn new_edit(tool: &Tool) -> Self {
        let draft = ToolDraft::from_tool(tool);
        Self {
            target: Some(tool.id),
            name: draft.name,
            website: draft.website,
            image_url: draft.image_url.unwrap_or_default(),
            category: draft.category,
            pricing: draft.pricing,
            rating: format!("{:.1}", draft.rating),
            tags: draft.tags,
            description: draft.description,
            focus: 0,
            error: None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % TOOL_FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + TOOL_FIELDS.len() - 1) % TOOL_FIELDS.len();
    }

    /// The text buffer under focus, when the focused field is textual.
    pub fn text_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.name),
            1 => Some(&mut self.website),
            2 => Some(&mut self.image_url),
            5 => Some(&mut self.rating),
            6 => Some(&mut self.tags),
            7 => Some(&mut self.description),
            _ => None,
        }
    }

    pub fn cycle_category(&mut self, step: isize) {
        let all = Category::ALL;
        let pos = all.iter().position(|c| *c == self.category).unwrap_or(0) as isize;
        let next = (pos + step).rem_euclid(all.len() as isize) as usize;
        self.category = all[next];
    }

    pub fn cycle_pricing(&mut self, step: isize) {
        let all = Pricing::ALL;
        let pos = all.iter().position(|p| *p == self.pricing).unwrap_or(0) as isize;
        let next = (pos + step).rem_euclid(all.len() as isize) as usize;
        self.pricing = all[next];
    }

    /// Builds the draft for submission, or the inline message that blocks
    /// it. Name and website are the required fields; the rating is parsed
    /// and clamped to the form's 1-5 range.
    pub fn draft(&self) -> Result<ToolDraft, String> {
        let rating: f32 = self
            .rating
            .trim()
            .parse()
            .map_err(|_| "Rating must be a number between 1 and 5".to_string())?;

        let draft = ToolDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            tags: self.tags.clone(),
            website: self.website.trim().to_string(),
            pricing: self.pricing,
            rating: rating.clamp(1.0, 5.0),
            image_url: {
                let url = self.image_url.trim();
                if url.is_empty() { None } else { Some(url.to_string()) }
            },
        };
        if !draft.is_submittable() {
            return Err("Name and website are required".to_string());
        }
        Ok(draft)
    }
}

//=========================================================================================
// Tag Browser
//=========================================================================================

/// Cursor over the catalog's tag union for building show/hide sets.
#[derive(Debug, Clone, Default)]
pub struct TagBrowser {
    pub tags: Vec<String>,
    pub cursor: usize,
}

impl TagBrowser {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags, cursor: 0 }
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < self.tags.len() {
            self.cursor += 1;
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.tags.get(self.cursor).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_blocks_on_password_mismatch() {
        let form = AuthForm {
            tab: AuthTab::Register,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "one".to_string(),
            confirm: "two".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(form.credentials().unwrap_err(), "Passwords don't match");
    }

    #[test]
    fn login_requires_both_fields() {
        let mut form = AuthForm::default();
        assert!(form.credentials().is_err());
        form.email = "ada@example.com".to_string();
        form.password = "pw".to_string();
        let creds = form.credentials().unwrap();
        assert_eq!(creds.name, None);
        assert_eq!(creds.email, "ada@example.com");
    }

    #[test]
    fn tool_form_blocks_until_name_and_website_present() {
        let mut form = ToolForm::new_add();
        assert!(form.draft().is_err());
        form.name = "Chat".to_string();
        form.website = "https://chat.example".to_string();
        assert!(form.draft().is_ok());
    }

    #[test]
    fn tool_form_clamps_and_rejects_bad_ratings() {
        let mut form = ToolForm::new_add();
        form.name = "Chat".to_string();
        form.website = "https://chat.example".to_string();

        form.rating = "9.5".to_string();
        assert_eq!(form.draft().unwrap().rating, 5.0);

        form.rating = "not a number".to_string();
        assert!(form.draft().is_err());
    }

    #[test]
    fn category_cycling_wraps_in_both_directions() {
        let mut form = ToolForm::new_add();
        let first = form.category;
        form.cycle_category(-1);
        form.cycle_category(1);
        assert_eq!(form.category, first);

        for _ in 0..Category::ALL.len() {
            form.cycle_category(1);
        }
        assert_eq!(form.category, first);
    }

    #[test]
    fn edit_form_prefills_from_the_record() {
        use uuid::Uuid;
        let tool = Tool {
            id: Uuid::new_v4(),
            name: "Chat".to_string(),
            description: "desc".to_string(),
            category: Category::Music,
            tags: vec!["nlp".to_string(), "chat".to_string()],
            website: "https://chat.example".to_string(),
            pricing: Pricing::Paid,
            rating: 4.5,
            popularity: 50,
            release_year: "2023".to_string(),
            image_url: None,
        };
        let form = ToolForm::new_edit(&tool);
        assert_eq!(form.target, Some(tool.id));
        assert_eq!(form.tags, "nlp, chat");
        assert_eq!(form.rating, "4.5");
        assert_eq!(form.category, Category::Music);
    }
}
