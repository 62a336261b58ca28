use crate::models::user::{Role, Status};

pub mod columns;
pub mod compare;
pub mod state;
pub mod view;

pub use columns::ColumnDef;
pub use state::TableState;
pub use view::{compute, TableView};

/// Rows shown per page of the user table.
pub const PAGE_SIZE: usize = 5;

/// Role dropdown: "all" or one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    Any,
    Only(Role),
}

impl RoleFilter {
    /// Parse a query/dropdown value. Empty and `"all"` mean any role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "all" => Some(RoleFilter::Any),
            other => Role::parse(other).map(RoleFilter::Only),
        }
    }

    pub fn allows(self, role: Role) -> bool {
        match self {
            RoleFilter::Any => true,
            RoleFilter::Only(r) => r == role,
        }
    }
}

/// Status dropdown: "all" or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(Status),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "all" => Some(StatusFilter::Any),
            other => Status::parse(other).map(StatusFilter::Only),
        }
    }

    /// Resolve the dropdown against the "active only" checkbox.
    /// A checked box always wins, even over an explicit "suspended".
    pub fn effective(self, active_only: bool) -> StatusFilter {
        if active_only {
            StatusFilter::Only(Status::Active)
        } else {
            self
        }
    }

    pub fn allows(self, status: Status) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

/// Sortable columns of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Role,
    LastLogin,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::Role => "role",
            SortKey::LastLogin => "lastLoginAt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "email" => Some(SortKey::Email),
            "role" => Some(SortKey::Role),
            "lastLoginAt" => Some(SortKey::LastLogin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir { #[default] Asc, Desc }

impl SortDir {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
    pub fn as_str(self) -> &'static str {
        match self { SortDir::Asc => "asc", SortDir::Desc => "desc" }
    }
    pub fn flipped(self) -> Self {
        match self { SortDir::Asc => SortDir::Desc, SortDir::Desc => SortDir::Asc }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub dir: SortDir,
}

impl SortSpec {
    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn toggled(self, key: SortKey) -> Self {
        if key == self.key {
            SortSpec { key, dir: self.dir.flipped() }
        } else {
            SortSpec { key, dir: SortDir::Asc }
        }
    }
}

/// Everything the table controls feed into [`compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    pub search: String,
    pub role: RoleFilter,
    pub status: StatusFilter,
    pub active_only: bool,
    pub sort: SortSpec,
    /// 1-based; out-of-range values are clamped when the view is computed.
    pub page: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        ViewParams {
            search: String::new(),
            role: RoleFilter::Any,
            status: StatusFilter::Any,
            active_only: false,
            sort: SortSpec::default(),
            page: 1,
        }
    }
}

impl ViewParams {
    pub fn effective_status(&self) -> StatusFilter {
        self.status.effective(self.active_only)
    }
}
