use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::table_filter::{
    self, RoleFilter, SortDir, SortKey, SortSpec, StatusFilter, ViewParams,
};
use crate::models::user::{User, UserEnvelope};
use crate::templates_structs::TablePageResponse;

/// Query string of `GET /api/users/table`. Every field is optional.
#[derive(Deserialize, Debug, Default)]
pub struct TableQuery {
    pub q: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub active_only: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
}

impl TableQuery {
    /// Turn raw query values into view parameters, rejecting unknown values.
    pub fn to_params(&self) -> Result<ViewParams, AppError> {
        let role = match self.role.as_deref() {
            Some(raw) => RoleFilter::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown role '{raw}'")))?,
            None => RoleFilter::Any,
        };
        let status = match self.status.as_deref() {
            Some(raw) => StatusFilter::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status '{raw}'")))?,
            None => StatusFilter::Any,
        };
        let active_only = match self.active_only.as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") | Some("on") => true,
            Some(raw) => return Err(AppError::BadRequest(format!("active_only must be a boolean, got '{raw}'"))),
        };
        let key = match self.sort.as_deref() {
            None | Some("") => SortKey::default(),
            Some(raw) => SortKey::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("cannot sort by '{raw}'")))?,
        };
        let dir = match self.dir.as_deref() {
            None | Some("") => SortDir::default(),
            Some(raw) => SortDir::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("sort direction must be asc or desc, got '{raw}'")))?,
        };
        let page = match self.page.as_deref() {
            None | Some("") => 1,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| AppError::BadRequest(format!("page must be a positive integer, got '{raw}'")))?,
        };

        Ok(ViewParams {
            search: self.q.clone().unwrap_or_default(),
            role,
            status,
            active_only,
            sort: SortSpec { key, dir },
            page,
        })
    }
}

/// GET /api/users - Full mock user list as `{ "items": [...] }`
pub async fn list(users: web::Data<Vec<User>>) -> HttpResponse {
    log::debug!("serving {} mock users", users.len());
    HttpResponse::Ok().json(UserEnvelope { items: users.get_ref().clone() })
}

/// GET /api/users/table - One page of the user table
/// Query params: q, role, status, active_only, sort, dir, page (default 1)
pub async fn table(
    users: web::Data<Vec<User>>,
    query: web::Query<TableQuery>,
) -> Result<HttpResponse, AppError> {
    let params = query.to_params()?;
    let view = table_filter::compute(users.get_ref(), &params);
    Ok(HttpResponse::Ok().json(TablePageResponse::new(view, params.sort)))
}
