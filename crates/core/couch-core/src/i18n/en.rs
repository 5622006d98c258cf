use super::catalog::{Message, MessageCatalog};
use super::Entry::{self, Group, Text};
use crate::activities::ALL_ACTIVITIES;

/// Key of the group listing every selectable activity.
pub const ACTIVITIES_GROUP: &str = "allActivities";

pub const MESSAGES: &[(&str, Entry)] = &[
    ("explore", Text("explore")),
    ("about", Text("about")),
    ("login", Text("login")),
    ("logout", Text("logout")),
    ("close", Text("close")),
    ("signup", Text("signup")),
    ("profile", Text("profile")),
    ("personal_informations", Text("personal informations")),
    ("activities", Text("activities")),
    ("conversations", Text("conversations")),
    ("languages", Text("languages")),
    ("pages", Text("my spots")),
    ("page", Text("page")),
    ("edit_page", Text("edit page")),
    ("edit", Text("edit")),
    ("cosport", Text("couchsport")),
    ("email", Text("email")),
    ("password", Text("password")),
    ("save", Text("save")),
    ("help", Text("help")),
    ("new", Text("new")),
    ("at", Text("at")),
    ("description", Text("description")),
    ("your", Text("your")),
    ("to", Text("to")),
    ("_message", Text("message")),
    ("cancel", Text("cancel")),
    ("send", Text("send")),
    ("modifications", Text("modifications")),
    ("contact", Text("contact")),
    (
        "about_content",
        Text(
            "begin the tour browsing available spots in the explore page or \
             create your acount and promote your own spot!",
        ),
    ),
    (
        "home",
        Group(&[
            (
                "speech_title",
                Text("Travel, make friends, practicing your favorite sports together !"),
            ),
            (
                "speech_content",
                Text(
                    "begin the tour browsing available spots in the explore page or \
                     create your acount and promote your own spot!",
                ),
            ),
        ]),
    ),
    (
        "message",
        Group(&[
            ("state", Text("your {0} is now {1}")),
            ("exist", Text("This {0} already exists in this page")),
            ("success_saving", Text("your {0} is saved")),
            ("success_deleting", Text("your {0} is deleted")),
            ("error_saving", Text("an error occured while saving your {0}")),
            ("error_deleting", Text("an error occured while deleting your {0}")),
            ("error_updating", Text("an error occured while updating your {0}")),
            ("length_below", Text("the {0} length must be below {1}")),
            ("length_above", Text("the {0} length must be above {1}")),
            ("too_big", Text("{0} is too big")),
            ("stand_by", Text("Please stand by")),
            ("empty", Text("You don't have messages for now")),
            (
                "auth",
                Group(&[
                    ("invalid_email", Text("")),
                    ("required", Text("{0} is required")),
                    ("invalid", Text("{0} is invalid")),
                    ("password_hint", Text("password must contains {len} characters")),
                    ("signup_success_welcome", Text("welcome")),
                ]),
            ),
        ]),
    ),
    (
        "p",
        Group(&[
            (
                "explore",
                Group(&[
                    ("sb_title", Text("travel...")),
                    ("sb_placeholder", Text("search for a place or an activity")),
                    ("view_details", Text("details")),
                ]),
            ),
            ("activities", Group(&[("hint", Text("select your activities"))])),
            (
                "conversations",
                Group(&[
                    ("last_message", Text("last message ")),
                    ("write_your_reply", Text("your answer")),
                ]),
            ),
            (
                "ped",
                Group(&[
                    ("name", Text("name")),
                    ("description", Text("description")),
                    ("long_desc_ph", Text("describe this place with mre details")),
                    ("couch_number", Text("Number of couch available")),
                    (
                        "map_help",
                        Text(
                            "Left click to the determine the spot location, right click to remove it",
                        ),
                    ),
                    ("upload_image_hint", Text("Add photos")),
                ]),
            ),
            (
                "pd",
                Group(&[
                    ("no_guests", Text("does not accept guests")),
                    ("guests", Text("accept guests")),
                    ("avail_couch", Text("couch")),
                    ("max_images", Text("Maximum number of images allowed")),
                ]),
            ),
        ]),
    ),
    (
        "fields",
        Group(&[
            ("email", Text("email")),
            ("username", Text("username")),
            ("firstname", Text("firstname")),
            ("lastname", Text("lastname")),
            ("gender", Text("gender")),
            ("streetname", Text("address")),
            ("city", Text("city")),
            ("zipcode", Text("zipcode")),
            ("country", Text("country")),
            ("phone", Text("phone")),
        ]),
    ),
];

pub fn catalog() -> MessageCatalog {
    let mut catalog = MessageCatalog::from_static(MESSAGES);
    catalog.insert(ACTIVITIES_GROUP, Message::Nested(activities_group()));
    catalog
}

fn activities_group() -> MessageCatalog {
    let mut group = MessageCatalog::new();
    for activity in ALL_ACTIVITIES {
        group.insert(activity.id, Message::Text(activity.label.to_string()));
    }
    group
}
