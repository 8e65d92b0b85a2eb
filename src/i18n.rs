//! Fixed user-facing messages.
//!
//! Spanish is the reference locale; English is provided for convenience.

/// Language used for every fixed message in the view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn title(self) -> &'static str {
        match self {
            Locale::Es => "Lista de Usuarios",
            Locale::En => "User List",
        }
    }

    pub fn loading(self) -> &'static str {
        match self {
            Locale::Es => "Cargando usuarios...",
            Locale::En => "Loading users...",
        }
    }

    /// Shown for any non-success HTTP status, whatever the code.
    pub fn fetch_failed(self) -> &'static str {
        match self {
            Locale::Es => "No se pudo obtener la lista de usuarios",
            Locale::En => "Could not retrieve the user list",
        }
    }

    pub fn search_placeholder(self) -> &'static str {
        match self {
            Locale::Es => "Buscar por nombre...",
            Locale::En => "Search by name...",
        }
    }

    pub fn search_title(self) -> &'static str {
        match self {
            Locale::Es => "Buscar",
            Locale::En => "Search",
        }
    }

    pub fn no_matches(self) -> &'static str {
        match self {
            Locale::Es => "No se encontraron usuarios que coincidan con la búsqueda.",
            Locale::En => "No users match the search.",
        }
    }

    /// `Error: {message}` line of the error state.
    pub fn error_line(self, message: &str) -> String {
        format!("Error: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_is_default() {
        assert_eq!(Locale::default(), Locale::Es);
        assert_eq!(Locale::default().loading(), "Cargando usuarios...");
    }

    #[test]
    fn error_line_prefixes_message() {
        assert_eq!(Locale::En.error_line("boom"), "Error: boom");
    }
}
