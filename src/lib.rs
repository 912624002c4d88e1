pub mod configuration;

pub mod holiday {
    pub mod holidayprovider;
    pub mod regioncalendar;
    pub mod rulebasedprovider;
    pub mod holidayindex;
    pub mod holidayindexcache;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod daterange;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod oneoffholiday;
    }
}

pub mod vacation {
    pub mod dayclassifier;
    pub mod windowexpander;
    pub mod vacationperiod;
    pub mod periodsearch;
    pub mod periodranker;
    pub mod planner;
}
