//! Error codes reported by the SlicingDice service.
//!
//! The service wraps failures in an envelope:
//!
//! ```json
//! {"errors": [{"code": 43, "message": "Column already exists", "more-info": "..."}]}
//! ```
//!
//! Each known code maps to exactly one [`ServiceErrorCode`]. The mapping is a
//! static table sorted by code; new codes are added by appending a row to the
//! `service_errors!` invocation below.

use std::fmt;

/// Band of the service error taxonomy a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorCategory {
    /// API key and permission failures (10-19).
    Auth,
    /// Malformed or rejected HTTP requests (20-29).
    Request,
    /// Account state problems (30-39).
    Account,
    /// Column definition failures (40-59).
    Column,
    /// Data insertion failures (60-79).
    Insert,
    /// Query failures (80-129).
    Query,
    /// Failures inside the service (130+).
    Internal,
}

impl fmt::Display for ServiceErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceErrorCategory::Auth => "auth",
            ServiceErrorCategory::Request => "request",
            ServiceErrorCategory::Account => "account",
            ServiceErrorCategory::Column => "column",
            ServiceErrorCategory::Insert => "insert",
            ServiceErrorCategory::Query => "query",
            ServiceErrorCategory::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// One row of the code table.
#[derive(Debug, Clone, Copy)]
struct ServiceErrorEntry {
    code: u16,
    error: ServiceErrorCode,
    category: ServiceErrorCategory,
    description: &'static str,
}

// Generates the `ServiceErrorCode` enum and the `TABLE` in declaration order.
// Rows must be listed in ascending code order: lookup is a binary search and
// `ServiceErrorCode as usize` indexes the table directly.
macro_rules! service_errors {
    (
        $( $code:literal => $variant:ident ($category:ident) $description:literal, )*
    ) => {
        /// A known error code reported by the service.
        ///
        /// Obtain one from an [`Error`](crate::Error) with
        /// [`service_error()`](crate::Error::service_error), or from a raw
        /// code with [`ServiceErrorCode::from_code`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum ServiceErrorCode {
            $(
                #[doc = $description]
                $variant,
            )*
        }

        static TABLE: &[ServiceErrorEntry] = &[
            $(
                ServiceErrorEntry {
                    code: $code,
                    error: ServiceErrorCode::$variant,
                    category: ServiceErrorCategory::$category,
                    description: $description,
                },
            )*
        ];
    };
}

service_errors! {
    2 => DemoUnavailable (Account) "The demo account is unavailable.",

    10 => AuthMissingHeader (Auth) "The request has no API key header.",
    11 => AuthApiKeyNotFound (Auth) "The API key was not found.",
    12 => AuthInvalidApiKey (Auth) "The API key is invalid.",
    13 => AuthIncorrectPermission (Auth) "The API key is not allowed to perform this operation.",
    14 => AuthInvalidRemoteAddress (Auth) "The API key is not allowed from this address.",
    15 => CustomKeyInvalidColumnCreation (Auth) "The custom key is not allowed to create columns.",
    16 => CustomKeyInvalidPermissionForColumn (Auth) "The custom key has no permission on this column.",
    17 => CustomKeyInvalidOperation (Auth) "The custom key is not allowed to perform this operation.",
    18 => CustomKeyNotPermitted (Auth) "Custom keys are not permitted for this account.",
    19 => CustomKeyRouteNotPermitted (Auth) "The custom key is not permitted on this route.",

    20 => RequestMissingContentType (Request) "The request has no Content-Type header.",
    21 => RequestIncorrectContentType (Request) "The Content-Type header value is not supported.",
    22 => RequestRateLimit (Request) "The request rate limit was exceeded.",
    23 => RequestInvalidJson (Request) "The request body is not valid JSON.",
    24 => RequestInvalidHttpMethod (Request) "The HTTP method is not allowed on this endpoint.",
    25 => RequestInvalidEndpoint (Request) "The endpoint does not exist.",
    26 => RequestIncorrectHttp (Request) "Requests must use HTTPS.",
    27 => RequestExceedLimit (Request) "The request exceeds the allowed size.",

    30 => AccountMissingPaymentMethod (Account) "The account has no payment method.",
    31 => AccountPaymentRequired (Account) "The account has a pending payment.",
    32 => AccountBanned (Account) "The account is banned.",
    33 => AccountDisabled (Account) "The account is disabled.",

    40 => ColumnMissingParam (Column) "The column definition is missing a parameter.",
    41 => ColumnType (Column) "The column type is invalid.",
    42 => ColumnIntegerValues (Column) "The column accepts only integer values.",
    43 => ColumnAlreadyExists (Column) "The column already exists.",
    44 => ColumnLimit (Column) "The column limit was reached.",
    45 => ColumnTimeSeriesLimit (Column) "The time-series column limit was reached.",
    46 => ColumnTimeSeriesSystemLimit (Column) "The system time-series column limit was reached.",
    47 => ColumnDecimalType (Column) "The column decimal type is invalid.",
    48 => ColumnStorageValue (Column) "The column storage value is invalid.",
    49 => ColumnInvalidApiName (Column) "The column API name is invalid.",
    50 => ColumnInvalidName (Column) "The column name is invalid.",
    51 => ColumnInvalidDescription (Column) "The column description is invalid.",
    52 => ColumnExceedDescriptionLength (Column) "The column description is too long.",
    53 => ColumnInvalidCardinality (Column) "The column cardinality is invalid.",
    54 => ColumnDecimalLimit (Column) "The column decimal places exceed the limit.",
    55 => ColumnRangeLimit (Column) "The enumerated column range exceeds the limit.",
    56 => ColumnExceededMaxNameLength (Column) "The column name is too long.",
    57 => ColumnExceededMaxApiNameLength (Column) "The column API name is too long.",
    58 => ColumnEmptyEntityId (Column) "The entity id is empty.",
    59 => ColumnExceededPermittedValue (Column) "The column value exceeds the permitted value.",

    60 => InsertInvalidDecimalPlaces (Insert) "The inserted value has invalid decimal places.",
    61 => InsertEntityValueType (Insert) "The entity value has an invalid type.",
    62 => InsertColumnNameType (Insert) "The column name has an invalid type.",
    63 => InsertColumnType (Insert) "The inserted value does not match the column type.",
    64 => InsertEntityNameTooBig (Insert) "The entity name is too long.",
    65 => InsertColumnValueTooBig (Insert) "The inserted value is too big.",
    66 => InsertTimeSeriesDateFormat (Insert) "The time-series date format is invalid.",
    67 => InsertColumnNotActive (Insert) "The column is not active.",
    68 => InsertIdLimit (Insert) "The insertion exceeds the entity id limit.",
    69 => InsertColumnLimit (Insert) "The insertion exceeds the column limit.",
    70 => InsertDateFormat (Insert) "The date format is invalid.",
    71 => InsertColumnStringEmptyValue (Insert) "The string value is empty.",
    72 => InsertColumnTimeSeriesInvalidParameter (Insert) "The time-series parameter is invalid.",
    73 => InsertColumnNumericInvalidValue (Insert) "The numeric value is invalid.",
    74 => InsertColumnTimeSeriesMissingValue (Insert) "The time-series value is missing.",
    75 => InsertInvalidRange (Insert) "The inserted value is outside the column range.",
    76 => InsertEmptyEntityId (Insert) "The inserted entity id is empty.",
    77 => InsertInvalidDimension (Insert) "The insertion targets an invalid dimension.",
    78 => InsertAutoCreateNotAllowed (Insert) "Automatic column creation is not allowed.",
    79 => InsertInvalidBody (Insert) "The insertion body is invalid.",

    80 => QueryMissingQuery (Query) "The query is missing.",
    81 => QueryInvalidType (Query) "The query type is invalid.",
    82 => QueryMissingTypeParam (Query) "The query type parameter is missing.",
    83 => QueryInvalidOperator (Query) "The query operator is invalid.",
    84 => QueryIncorrectOperatorUsage (Query) "The query operator is used incorrectly.",
    85 => QueryColumnNotActive (Query) "The queried column is not active.",
    86 => QueryMissingOperator (Query) "The query operator is missing.",
    87 => QueryIncomplete (Query) "The query is incomplete.",
    88 => QueryEventCount (Query) "The event count query is invalid.",
    89 => QueryInvalidMetric (Query) "The query metric is invalid.",
    90 => QueryInteger (Query) "The query expects an integer value.",
    91 => QueryColumnLimit (Query) "The query exceeds the column limit.",
    92 => QueryLevelLimit (Query) "The query exceeds the nesting level limit.",
    93 => QueryBadAggsFormation (Query) "The aggregation is malformed.",
    94 => QueryInvalidAggFilter (Query) "The aggregation filter is invalid.",
    95 => QueryMetricsLevel (Query) "The metrics level is invalid.",
    96 => QueryTimeSeries (Query) "The time-series query is invalid.",
    97 => QueryMetricsType (Query) "The metrics type is invalid.",
    98 => QueryContainsNumeric (Query) "The contains operator does not accept numeric values.",
    99 => QueryExistsEntityLimit (Query) "The existence query exceeds the id limit.",
    100 => QueryMultipleFilters (Query) "The query has multiple filters where one is allowed.",
    101 => QueryInvalidName (Query) "The query name is invalid.",
    102 => QueryMissingNameParam (Query) "The saved query name is missing.",
    103 => QuerySavedAlreadyExists (Query) "The saved query already exists.",
    104 => QuerySavedNotExists (Query) "The saved query does not exist.",
    105 => QuerySavedInvalidType (Query) "The saved query type is invalid.",
    106 => MethodNotAllowed (Query) "The method is not allowed for this query.",
    107 => QueryExistsMissingIds (Query) "The existence query has no ids.",
    108 => QueryInvalidFormat (Query) "The query format is invalid.",
    109 => QueryTopValuesParameterEmpty (Query) "The top values parameter is empty.",
    110 => QueryDataExtractionLimitValue (Query) "The data extraction limit is invalid.",
    111 => QueryDataExtractionLimitValueTooBig (Query) "The data extraction limit is too big.",
    112 => QueryDataExtractionLimitAndPageToken (Query) "The data extraction limit cannot be combined with a page token.",
    113 => QueryDataExtractionPageTokenValue (Query) "The data extraction page token is invalid.",
    114 => QueryDataExtractionColumnLimit (Query) "The data extraction exceeds the column limit.",
    115 => QueryExistsEntityEmpty (Query) "The existence query id list is empty.",
    116 => QueryInvalidTimeSeriesPrecision (Query) "The time-series precision is invalid.",
    117 => QueryDateFormat (Query) "The query date format is invalid.",
    118 => QueryRelativeInterval (Query) "The relative interval is invalid.",
    119 => QueryInvalidBetween (Query) "The between operator is invalid.",
    120 => QueryInvalidRange (Query) "The query range is invalid.",
    121 => QueryTopValuesLimit (Query) "The top values query exceeds the limit.",
    122 => QueryTopValuesContainsLimit (Query) "The top values contains list exceeds the limit.",
    123 => QueryAggregationLimit (Query) "The aggregation query exceeds the limit.",
    124 => QueryCountLimit (Query) "The count query exceeds the limit.",
    125 => QueryInvalidDimension (Query) "The queried dimension is invalid.",
    126 => QueryInvalidSql (Query) "The SQL query is invalid.",
    127 => QueryTimeout (Query) "The query timed out.",
    128 => QueryResultTooLarge (Query) "The query result is too large.",
    129 => QueryInvalidBypassCache (Query) "The bypass-cache value is invalid.",

    130 => InternalError (Internal) "The service failed internally.",
    131 => InternalTimeout (Internal) "The service timed out internally.",
    132 => InternalUnavailable (Internal) "The service is temporarily unavailable.",
    133 => InternalDatabaseUnavailable (Internal) "The database is temporarily unavailable.",
    134 => InternalMaintenance (Internal) "The service is under maintenance.",

    1502 => RequestRateLimited (Request) "Too many requests for this account.",
    1507 => RequestBodySizeExceeded (Request) "The request body size limit was exceeded.",
    2012 => InsertEntitiesLimit (Insert) "The insertion exceeds the entities per request limit.",
    2013 => InsertColumnsLimit (Insert) "The insertion exceeds the columns per request limit.",
}

impl ServiceErrorCode {
    /// Looks up a raw code from an error envelope.
    ///
    /// Returns `None` for codes outside the table.
    ///
    /// ```rust
    /// use slicingdice::{ServiceErrorCategory, ServiceErrorCode};
    ///
    /// let code = ServiceErrorCode::from_code(43).unwrap();
    /// assert_eq!(code, ServiceErrorCode::ColumnAlreadyExists);
    /// assert_eq!(code.category(), ServiceErrorCategory::Column);
    /// assert!(ServiceErrorCode::from_code(9999).is_none());
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        let code = u16::try_from(code).ok()?;
        TABLE
            .binary_search_by_key(&code, |entry| entry.code)
            .ok()
            .map(|index| TABLE[index].error)
    }

    /// Returns the numeric code.
    #[inline]
    pub fn code(self) -> u16 {
        self.entry().code
    }

    /// Returns the taxonomy band.
    #[inline]
    pub fn category(self) -> ServiceErrorCategory {
        self.entry().category
    }

    /// Returns a short human-readable description.
    #[inline]
    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Returns `true` if the condition is usually transient.
    pub fn is_retriable(self) -> bool {
        matches!(
            self,
            ServiceErrorCode::RequestRateLimit
                | ServiceErrorCode::RequestRateLimited
                | ServiceErrorCode::InternalTimeout
                | ServiceErrorCode::InternalUnavailable
                | ServiceErrorCode::InternalDatabaseUnavailable
                | ServiceErrorCode::InternalMaintenance
        )
    }

    /// Returns every known code in ascending order.
    pub fn all() -> impl Iterator<Item = ServiceErrorCode> {
        TABLE.iter().map(|entry| entry.error)
    }

    fn entry(self) -> &'static ServiceErrorEntry {
        &TABLE[self as usize]
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}
