// Query parameter names
pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";
pub const LABELS: &str = "labels";

pub const COMMA: &str = ",";
