//! Static description of every service operation.

use std::fmt;

use crate::auth::PrivilegeLevel;
use crate::transport::Method;
use crate::validate::PayloadRule;

/// A service operation exposed by [`Client`](crate::Client).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    /// Create one or more columns.
    CreateColumn,
    /// List columns.
    Columns,
    /// Describe the database.
    Database,
    /// Insert data.
    Insert,
    /// Count entities.
    CountEntity,
    /// Count all entities.
    CountEntityTotal,
    /// Count events.
    CountEvent,
    /// Aggregate.
    Aggregation,
    /// Top values per column.
    TopValues,
    /// Test which entities exist.
    ExistsEntity,
    /// Run a saved query.
    SavedQuery,
    /// List saved queries.
    SavedQueries,
    /// Create a saved query.
    CreateSavedQuery,
    /// Update a saved query.
    UpdateSavedQuery,
    /// Delete a saved query.
    DeleteSavedQuery,
    /// Extract data scores.
    Score,
    /// Extract data values.
    Result,
    /// Run a SQL query.
    Sql,
}

/// Fixed metadata for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Privilege the resolved key must satisfy.
    pub level: PrivilegeLevel,
    /// HTTP method.
    pub method: Method,
    /// Path appended to the base URL, starting and ending with `/`.
    pub path: &'static str,
    /// Local check applied to the payload.
    pub rule: PayloadRule,
}

const fn describe(
    level: PrivilegeLevel,
    method: Method,
    path: &'static str,
    rule: PayloadRule,
) -> OperationDescriptor {
    OperationDescriptor { level, method, path, rule }
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 18] = [
        Operation::CreateColumn,
        Operation::Columns,
        Operation::Database,
        Operation::Insert,
        Operation::CountEntity,
        Operation::CountEntityTotal,
        Operation::CountEvent,
        Operation::Aggregation,
        Operation::TopValues,
        Operation::ExistsEntity,
        Operation::SavedQuery,
        Operation::SavedQueries,
        Operation::CreateSavedQuery,
        Operation::UpdateSavedQuery,
        Operation::DeleteSavedQuery,
        Operation::Score,
        Operation::Result,
        Operation::Sql,
    ];

    /// Returns the operation's descriptor.
    pub const fn descriptor(self) -> OperationDescriptor {
        use PayloadRule as R;
        use PrivilegeLevel::{Admin, Read, Write};
        match self {
            Operation::CreateColumn => describe(Admin, Method::Post, "/column/", R::Column),
            Operation::Columns => describe(Admin, Method::Get, "/column/", R::None),
            Operation::Database => describe(Admin, Method::Get, "/project/", R::None),
            Operation::Insert => describe(Write, Method::Post, "/insert/", R::None),
            Operation::CountEntity => {
                describe(Read, Method::Post, "/query/count/entity/", R::Count)
            }
            Operation::CountEntityTotal => {
                describe(Read, Method::Post, "/query/count/entity/total/", R::None)
            }
            Operation::CountEvent => describe(Read, Method::Post, "/query/count/event/", R::Count),
            Operation::Aggregation => {
                describe(Read, Method::Post, "/query/aggregation/", R::Aggregation)
            }
            Operation::TopValues => describe(Read, Method::Post, "/query/top_values/", R::TopValues),
            Operation::ExistsEntity => {
                describe(Read, Method::Post, "/query/exists/entity/", R::ExistsEntity)
            }
            Operation::SavedQuery => describe(Read, Method::Get, "/query/saved/", R::None),
            Operation::SavedQueries => describe(Admin, Method::Get, "/query/saved/", R::None),
            Operation::CreateSavedQuery => {
                describe(Write, Method::Post, "/query/saved/", R::SavedQuery)
            }
            Operation::UpdateSavedQuery => describe(Admin, Method::Put, "/query/saved/", R::None),
            Operation::DeleteSavedQuery => {
                describe(Admin, Method::Delete, "/query/saved/", R::None)
            }
            Operation::Score => {
                describe(Read, Method::Post, "/data_extraction/score/", R::DataExtraction)
            }
            Operation::Result => {
                describe(Read, Method::Post, "/data_extraction/result/", R::DataExtraction)
            }
            Operation::Sql => describe(Read, Method::Post, "/query/sql/", R::None),
        }
    }

    /// Returns the operation name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::CreateColumn => "create_column",
            Operation::Columns => "columns",
            Operation::Database => "database",
            Operation::Insert => "insert",
            Operation::CountEntity => "count_entity",
            Operation::CountEntityTotal => "count_entity_total",
            Operation::CountEvent => "count_event",
            Operation::Aggregation => "aggregation",
            Operation::TopValues => "top_values",
            Operation::ExistsEntity => "exists_entity",
            Operation::SavedQuery => "saved_query",
            Operation::SavedQueries => "saved_queries",
            Operation::CreateSavedQuery => "create_saved_query",
            Operation::UpdateSavedQuery => "update_saved_query",
            Operation::DeleteSavedQuery => "delete_saved_query",
            Operation::Score => "score",
            Operation::Result => "result",
            Operation::Sql => "sql",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
