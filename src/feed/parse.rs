use bytes::Bytes;
use rss::{Channel, Item};

use crate::extraction::types::RawFeedItem;

use super::types::FeedError;

pub fn parse_channel(xml: &Bytes) -> Result<Channel, FeedError> {
    Channel::read_from(&xml[..]).map_err(FeedError::Parse)
}

pub fn raw_item(item: &Item) -> RawFeedItem {
    RawFeedItem {
        guid: item.guid().map(|g| g.value().trim().to_string()).filter(|s| !s.is_empty()),
        link: item.link().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        title: item.title().map(|s| s.trim().to_string()),
        description: item.description().map(str::to_string),
    }
}

pub fn raw_items(channel: &Channel) -> Vec<RawFeedItem> {
    channel.items().iter().map(raw_item).collect()
}
