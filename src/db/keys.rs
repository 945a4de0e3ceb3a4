// Fixed storage keys. Collections are JSON arrays, the last two are single objects.
pub const USERS: &str = "freelancer_users";
pub const CATEGORIES: &str = "freelancer_categories";
pub const GIGS: &str = "freelancer_gigs";
pub const ORDERS: &str = "freelancer_orders";
pub const REVIEWS: &str = "freelancer_reviews";
pub const MESSAGES: &str = "freelancer_messages";
pub const DISPUTES: &str = "freelancer_disputes";
pub const NOTIFICATIONS: &str = "freelancer_notifications";
pub const WITHDRAWALS: &str = "freelancer_withdrawals";
pub const JOB_REQUESTS: &str = "freelancer_job_requests";
pub const JOB_OFFERS: &str = "freelancer_job_offers";
pub const SETTINGS: &str = "freelancer_settings";
pub const CURRENT_USER: &str = "freelancer_current_user";

pub const ALL: [&str; 13] = [
    USERS,
    CATEGORIES,
    GIGS,
    ORDERS,
    REVIEWS,
    MESSAGES,
    DISPUTES,
    NOTIFICATIONS,
    WITHDRAWALS,
    JOB_REQUESTS,
    JOB_OFFERS,
    SETTINGS,
    CURRENT_USER,
];
