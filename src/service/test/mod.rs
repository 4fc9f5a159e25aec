mod matcher;
mod report;
