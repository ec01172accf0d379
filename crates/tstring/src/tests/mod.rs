mod property_string;
mod scenario;
