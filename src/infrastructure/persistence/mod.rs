mod holiday_files;
mod in_memory;

pub use holiday_files::JsonHolidaySource;
pub use in_memory::InMemoryHolidaySource;
