use axum::extract::Multipart;

use crate::AppResult;

pub(crate) struct UploadedFile {
    pub(crate) name: String,
    pub(crate) bytes: Vec<u8>,
}

pub(crate) struct ListingForm {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) price: i64,
    pub(crate) location: String,
    pub(crate) country: String,
    pub(crate) image: Option<UploadedFile>,
}

// one multipart body carries the listing fields plus at most one file
// under the fixed "image" field name
pub(crate) async fn read_form(mut multipart: Multipart) -> AppResult<ListingForm> {
    let mut title = String::new();
    let mut description = String::new();
    let mut price: i64 = 0;
    let mut location = String::new();
    let mut country = String::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await?.to_vec();
                // browsers submit an empty part when no file was picked
                if !file_name.is_empty() && !bytes.is_empty() {
                    image = Some(UploadedFile {
                        name: file_name,
                        bytes,
                    });
                }
            }
            "title" => title = field.text().await?,
            "description" => description = field.text().await?,
            "price" => price = field.text().await?.trim().parse()?,
            "location" => location = field.text().await?,
            "country" => country = field.text().await?,
            _ => {}
        }
    }

    Ok(ListingForm {
        title,
        description,
        price,
        location,
        country,
        image,
    })
}
