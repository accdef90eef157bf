// Constants shared by the quote store and the pricing engine.
// The store key is suffixed to the metal's lowercase name, e.g. "goldCalculatorSaves".
pub const STORE_CAPACITY: usize = 10;
pub const STORE_KEY_SUFFIX: &str = "CalculatorSaves";

// Percent → fraction divisor used by the wastage formula
pub const PERCENT_DIVISOR: f64 = 100.0;

// Display precision for wastage grams; currency precision comes from the INR definition
pub const GRAMS_DECIMALS: usize = 3;

// Upper bound on a wastage percent; also caps a sweep at 101 rows
pub const MAX_WASTAGE_PERCENT: u32 = 100;
