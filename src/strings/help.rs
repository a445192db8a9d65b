//! # Help Text
//!
//! The main help message shown in response to `/start`.

pub const MAIN: &str = concat!(
    "👋 Hi! I'm your job & news bot.\n",
    "Use commands like:\n",
    "`/jobs location keyword`\n",
    "`/internships location keyword`\n",
    "`/technews keyword`\n",
    "\n",
    "Example: `/jobs remote python`"
);
