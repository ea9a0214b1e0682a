mod contribution_dto;

pub use contribution_dto::{
    ContributionCalendarDto, DailyCountDto, DayCellDto, MonthLabelDto, WeekColumnDto,
};
