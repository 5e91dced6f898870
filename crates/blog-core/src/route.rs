//! Hash routes of the console.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Article(String),
    Login,
    Register,
    Profile,
    AdminArticles,
    AdminCategories,
    AdminNewArticle,
    AdminEditArticle(String),
    AdminPreview,
    NotFound,
}

impl Route {
    /// Parse a location hash (`#/admin`) or a bare path (`/admin`).
    pub fn parse(raw: &str) -> Self {
        let path = raw.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["articles", id] => Route::Article(decode(id)),
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["profile"] => Route::Profile,
            ["admin"] | ["admin", "articles"] => Route::AdminArticles,
            ["admin", "category"] => Route::AdminCategories,
            ["admin", "add-article"] => Route::AdminNewArticle,
            ["admin", "edit-article", id] => Route::AdminEditArticle(decode(id)),
            ["admin", "preview"] => Route::AdminPreview,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Article(id) => format!("/articles/{}", encode(id)),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::AdminArticles => "/admin".to_string(),
            Route::AdminCategories => "/admin/category".to_string(),
            Route::AdminNewArticle => "/admin/add-article".to_string(),
            Route::AdminEditArticle(id) => format!("/admin/edit-article/{}", encode(id)),
            Route::AdminPreview => "/admin/preview".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminArticles
                | Route::AdminCategories
                | Route::AdminNewArticle
                | Route::AdminEditArticle(_)
                | Route::AdminPreview
        )
    }

    pub fn requires_session(&self) -> bool {
        self.requires_admin() || *self == Route::Profile
    }

    /// Where the user may actually go, given the current session.
    pub fn guard(self, session: Option<&Session>) -> Route {
        match session {
            None if self.requires_session() => Route::Login,
            Some(s) if self.requires_admin() && !s.is_admin() => Route::Home,
            _ => self,
        }
    }

    /// Landing page after login
    pub fn after_login(session: &Session) -> Route {
        if session.is_admin() {
            Route::AdminArticles
        } else {
            Route::Home
        }
    }
}

fn encode(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn session(role: Role) -> Session {
        Session {
            token: "t".into(),
            username: "u".into(),
            role,
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/articles/abc-1"), Route::Article("abc-1".into()));
        assert_eq!(Route::parse("/admin"), Route::AdminArticles);
        assert_eq!(Route::parse("#/admin/category"), Route::AdminCategories);
        assert_eq!(Route::parse("#/admin/edit-article/42?x=1"), Route::AdminEditArticle("42".into()));
        assert_eq!(Route::parse("#/nope/nope"), Route::NotFound);
    }

    #[test]
    fn test_path_roundtrip_with_encoded_id() {
        let route = Route::Article("a b/c".into());
        assert_eq!(route.href(), "#/articles/a%20b%2Fc");
        assert_eq!(Route::parse(&route.href()), route);
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::AdminCategories.guard(None), Route::Login);
        assert_eq!(Route::Profile.guard(None), Route::Login);
        assert_eq!(Route::Home.guard(None), Route::Home);
        assert_eq!(Route::AdminArticles.guard(Some(&session(Role::User))), Route::Home);
        assert_eq!(
            Route::AdminArticles.guard(Some(&session(Role::Admin))),
            Route::AdminArticles
        );
    }

    #[test]
    fn test_after_login() {
        assert_eq!(Route::after_login(&session(Role::Admin)), Route::AdminArticles);
        assert_eq!(Route::after_login(&session(Role::User)), Route::Home);
    }
}
