#[derive(Debug, Clone)]
pub enum Message {
    // === CALCULATION MESSAGES ===
    WorkingHoursResult(String, String), // hours, label
    WorkingDaysResult(u32),
    FormattedHours(String),
    InvalidHoursValue(String),
    ActiveWindow(String), // window description

    // === TICKET MESSAGES ===
    TicketsLoaded(usize, String), // count, path
    NoTicketsFound(String),       // path
    TicketTimestampInvalid(String, String), // ticket id, error
    TicketsSkipped(usize),
    CycleReportHeader(String),    // path
    CycleSummaryHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigInvalid(String),
    ConfigModuleWorkday,
    ConfigModuleReport,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(String), // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptWorkDayStartHour,
    PromptWorkDayEndHour,
    PromptHoursPerWorkDay,
    PromptTimeZone,
    PromptSlaHours,
    PromptShowDays,
}
