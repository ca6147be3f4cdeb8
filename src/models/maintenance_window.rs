wire_enum! {
    pub enum MonthName {
        January = "JANUARY",
        February = "FEBRUARY",
        March = "MARCH",
        April = "APRIL",
        May = "MAY",
        June = "JUNE",
        July = "JULY",
        August = "AUGUST",
        September = "SEPTEMBER",
        October = "OCTOBER",
        November = "NOVEMBER",
        December = "DECEMBER",
    }
}

wire_enum! {
    pub enum DayOfWeekName {
        Monday = "MONDAY",
        Tuesday = "TUESDAY",
        Wednesday = "WEDNESDAY",
        Thursday = "THURSDAY",
        Friday = "FRIDAY",
        Saturday = "SATURDAY",
        Sunday = "SUNDAY",
    }
}

wire_enum! {
    pub enum MaintenancePreference {
        NoPreference = "NO_PREFERENCE",
        CustomPreference = "CUSTOM_PREFERENCE",
    }
}

wire_enum! {
    /// Whether patches are applied one node at a time or to all nodes at once.
    pub enum PatchingMode {
        Rolling = "ROLLING",
        Nonrolling = "NONROLLING",
    }
}

resource_model! {
    pub struct Month = "Month" {
        name: MonthName = "name" soft;
    }
}

resource_model! {
    pub struct DayOfWeek = "DayOfWeek" {
        name: DayOfWeekName = "name" soft;
    }
}

resource_model! {
    /// Scheduling preferences for maintenance on a DB system or Exadata
    /// infrastructure.
    pub struct MaintenanceWindow = "MaintenanceWindow" {
        preference: MaintenancePreference = "preference" soft, default "NO_PREFERENCE";
        patching_mode: PatchingMode = "patchingMode" soft;
        is_custom_action_timeout_enabled: bool = "isCustomActionTimeoutEnabled";
        /// Minutes to wait for custom actions, 15 to 120.
        custom_action_timeout_in_mins: i64 = "customActionTimeoutInMins";
        is_monthly_patching_enabled: bool = "isMonthlyPatchingEnabled";
        months: Vec<Month> = "months";
        /// 1 to 4; week 1 is days 1-7 of the month.
        weeks_of_month: Vec<i64> = "weeksOfMonth";
        days_of_week: Vec<DayOfWeek> = "daysOfWeek";
        /// Start hours in UTC, as multiples of 4 (0, 4, 8, 12, 16, 20).
        hours_of_day: Vec<i64> = "hoursOfDay";
        lead_time_in_weeks: i64 = "leadTimeInWeeks";
        skip_ru: Vec<bool> = "skipRu";
    }
}
