pub(crate) mod timezone;

pub(crate) use timezone::{Clock, Timezone};
