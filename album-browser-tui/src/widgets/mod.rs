pub mod album_list;
pub mod track_list;
