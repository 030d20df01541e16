use flex_error::define_error;

define_error! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    ValidationError {
        Empty
            |_| { "identifier cannot be blank" },

        ContainSeparator
            { id: String }
            |e| { format!("identifier {} cannot contain separator '/'", e.id) },

        InvalidLength
            {
                id: String,
                length: usize,
                min: usize,
                max: usize,
            }
            |e| {
                format!("identifier {} has invalid length {}; must be between {} and {} characters",
                    e.id, e.length, e.min, e.max)
            },

        InvalidCharacter
            { id: String }
            |e| {
                format!("identifier {} must only contain alphanumeric characters or '.', '_', '+', '-', '#', '[', ']', '<', '>'",
                    e.id)
            },
    }
}
