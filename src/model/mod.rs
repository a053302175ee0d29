/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Request parameter models for API calls
pub mod requests;
/// Response envelope models from API calls
pub mod responses;
