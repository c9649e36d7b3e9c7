pub mod animator;
pub mod backgrounds;
pub mod countdown;
pub mod cursor;
pub mod orbs;
pub mod pointer;
pub mod radar;
pub mod scroll;
pub mod sections;
