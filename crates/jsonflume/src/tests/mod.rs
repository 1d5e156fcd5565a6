mod decode;
mod events_bad;
mod property_partition;
